//! Command Model
//!
//! The live command objects a host framework hands out before it pushes
//! definitions to the platform. Two shapes exist: slash commands carry a
//! name, a description and options; context-menu commands carry only a name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Locale tag to localized text, as sent to the platform.
pub type Localizations = HashMap<String, String>;

/// Insert one locale's text, creating the map on first use.
///
/// Entries for other locales are left untouched.
pub(crate) fn overlay(map: &mut Option<Localizations>, locale: &str, text: &str) {
    map.get_or_insert_with(HashMap::new)
        .insert(locale.to_string(), text.to_string());
}

/// An option declared on a slash command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<Localizations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<Localizations>,
}

impl CommandOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// A chat-input command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommand {
    pub name: String,
    pub description: String,
    /// Qualified name of the enclosing group, for subcommands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<Localizations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<Localizations>,
}

impl SlashCommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Nest this command under a group.
    pub fn in_group(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Group path and name joined by spaces, e.g. `"config set"`.
    pub fn qualified_name(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{} {}", parent, self.name),
            None => self.name.clone(),
        }
    }

    /// Declared option with exactly this name.
    pub fn option_mut(&mut self, name: &str) -> Option<&mut CommandOption> {
        self.options.iter_mut().find(|o| o.name == name)
    }
}

/// Which entity a context-menu command targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMenuKind {
    #[default]
    User,
    Message,
}

/// A right-click command. Has no description and no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuCommand {
    pub name: String,
    pub kind: ContextMenuKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<Localizations>,
}

impl ContextMenuCommand {
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ContextMenuKind::User,
            name_localizations: None,
        }
    }

    pub fn message(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ContextMenuKind::Message,
            name_localizations: None,
        }
    }

    pub fn qualified_name(&self) -> String {
        self.name.clone()
    }
}

/// Any command a host may hold in its pending registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApplicationCommand {
    Slash(SlashCommand),
    ContextMenu(ContextMenuCommand),
}

impl ApplicationCommand {
    pub fn qualified_name(&self) -> String {
        match self {
            ApplicationCommand::Slash(command) => command.qualified_name(),
            ApplicationCommand::ContextMenu(command) => command.qualified_name(),
        }
    }

    pub fn name_localizations(&self) -> Option<&Localizations> {
        match self {
            ApplicationCommand::Slash(command) => command.name_localizations.as_ref(),
            ApplicationCommand::ContextMenu(command) => command.name_localizations.as_ref(),
        }
    }

    /// `None` for context-menu commands.
    pub fn as_slash(&self) -> Option<&SlashCommand> {
        match self {
            ApplicationCommand::Slash(command) => Some(command),
            ApplicationCommand::ContextMenu(_) => None,
        }
    }
}

impl From<SlashCommand> for ApplicationCommand {
    fn from(command: SlashCommand) -> Self {
        ApplicationCommand::Slash(command)
    }
}

impl From<ContextMenuCommand> for ApplicationCommand {
    fn from(command: ContextMenuCommand) -> Self {
        ApplicationCommand::ContextMenu(command)
    }
}
