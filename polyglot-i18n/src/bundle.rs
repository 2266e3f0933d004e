//! Internationalization bundles
//!
//! The caller-supplied translation data for one locale: a string table for
//! responses and per-command localizations for names and descriptions.
//!
//! ```
//! use polyglot_i18n::{CommandLocalization, Internationalization};
//!
//! let de = Internationalization::new()
//!     .with_string("Hello!", "Hallo!")
//!     .with_command(
//!         "help",
//!         CommandLocalization::new()
//!             .with_name("hilfe")
//!             .with_description("Zeigt die Hilfe an"),
//!     );
//!
//! assert_eq!(de.strings.unwrap()["Hello!"], "Hallo!");
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Original-language string to translated string, for one locale.
pub type StringTable = HashMap<String, String>;

/// Command qualified name to its localization, for one locale.
pub type CommandTable = HashMap<String, CommandLocalization>;

/// Locale key (either separator convention) to its bundle.
pub type Translations = HashMap<String, Internationalization>;

/// Name and description overrides for a command option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLocalization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionLocalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Name and description overrides for a command, plus its options.
///
/// Options do not nest further.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLocalization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keyed by the option name the host framework assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, OptionLocalization>>,
}

impl CommandLocalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_option(mut self, option: impl Into<String>, localization: OptionLocalization) -> Self {
        self.options
            .get_or_insert_with(HashMap::new)
            .insert(option.into(), localization);
        self
    }
}

/// Everything supplied for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internationalization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings: Option<StringTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<CommandTable>,
}

impl Internationalization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one response string translation.
    pub fn with_string(mut self, original: impl Into<String>, translated: impl Into<String>) -> Self {
        self.strings
            .get_or_insert_with(HashMap::new)
            .insert(original.into(), translated.into());
        self
    }

    /// Add the localization for one command, keyed by qualified name.
    pub fn with_command(mut self, qualified_name: impl Into<String>, localization: CommandLocalization) -> Self {
        self.commands
            .get_or_insert_with(HashMap::new)
            .insert(qualified_name.into(), localization);
        self
    }
}

/// Parse a JSON document mapping locale keys to bundles.
///
/// ```
/// use polyglot_i18n::parse_translations;
///
/// let translations = parse_translations(r#"{
///     "de": { "strings": { "Hello!": "Hallo!" } },
///     "en_GB": { "commands": { "color": { "name": "colour" } } }
/// }"#).unwrap();
///
/// assert!(translations["de"].commands.is_none());
/// assert_eq!(translations["en_GB"].commands.as_ref().unwrap()["color"].name.as_deref(), Some("colour"));
/// ```
pub fn parse_translations(json: &str) -> Result<Translations> {
    Ok(serde_json::from_str(json)?)
}
