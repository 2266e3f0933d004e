//! Localization for Chat Bot Commands
//!
//! Provides the pieces a bot needs to speak its users' languages:
//!
//! - **String Lookup**: Translate response text per locale, passing missing
//!   translations through unchanged
//! - **Locale Resolution**: Pick the user's or the server's locale before each command
//! - **Command Localization**: Overlay localized names and descriptions onto
//!   commands and their options before they are synchronized to the platform
//! - **Positional Formatting**: `{}` / `{0}` substitution into translated text
//!
//! # Quick Start
//!
//! ```rust
//! use polyglot_i18n::{
//!     CommandLocalization, CommandRegistry, I18n, I18nConfig, Internationalization, Invocation,
//!     SlashCommand,
//! };
//!
//! let mut bot = CommandRegistry::new();
//! bot.add_command(SlashCommand::new("help", "Shows help"));
//!
//! let i18n = I18n::new(
//!     &mut bot,
//!     I18nConfig::default().consider_user_locale(true),
//!     [(
//!         "de",
//!         Internationalization::new()
//!             .with_string("Hello!", "Hallo!")
//!             .with_command("help", CommandLocalization::new().with_name("hilfe")),
//!     )],
//! );
//!
//! // Before syncing commands to the platform
//! let report = i18n.localize_commands(&mut bot);
//! assert!(report.is_complete());
//! bot.sync_commands();
//!
//! // The host runs the hook before each command
//! bot.invoke(&Invocation::new("help").with_locale("de"));
//! assert_eq!(i18n.get_text("Hello!"), "Hallo!");
//! ```
//!
//! # Concurrent Invocations
//!
//! [`I18n::get_text`] reads a single current locale shared by every
//! invocation. Hosts that process commands concurrently should resolve a
//! [`LocaleScope`] per invocation with [`I18n::scope`] and translate through it.

mod bundle;
mod command;
mod config;
mod context;
mod error;
mod format;
mod host;
mod i18n;
mod locale;
mod localizer;
mod store;

pub use bundle::{
    CommandLocalization, CommandTable, Internationalization, OptionLocalization, StringTable,
    Translations, parse_translations,
};
pub use command::{
    ApplicationCommand, CommandOption, ContextMenuCommand, ContextMenuKind, Localizations,
    SlashCommand,
};
pub use config::I18nConfig;
pub use context::{CurrentLocale, LocaleScope, Translator, resolve_locale};
pub use error::{FormatError, I18nError};
pub use format::format_positional;
pub use host::{BeforeInvokeHook, CommandHost, CommandRegistry, Invocation, InvocationContext};
pub use i18n::{I18n, active, get_text, get_text_fmt, uninstall};
pub use locale::{Locale, SUPPORTED_LOCALES, normalize_tag};
pub use localizer::{Localizable, LocalizationReport, Overlay, localize, localize_pending};
pub use store::TranslationStore;

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ApplicationCommand, CommandHost, CommandLocalization, CommandOption, ContextMenuCommand,
        I18n, I18nConfig, I18nError, Internationalization, InvocationContext, Locale,
        Localizable, OptionLocalization, Result, SlashCommand, t,
    };
}

#[cfg(test)]
mod proptests {
    use crate::{I18nConfig, Internationalization, Locale, TranslationStore, format_positional};
    use proptest::prelude::*;

    fn tag() -> impl Strategy<Value = String> {
        "[a-z]{2}(_[A-Z]{2})?"
    }

    proptest! {
        #[test]
        fn underscore_keys_resolve_with_hyphen(key in tag(), original in "[A-Za-z ]{1,20}", translated in "[A-Za-z ]{1,20}") {
            let store = TranslationStore::new(
                vec![(key.clone(), Internationalization::new().with_string(original.clone(), translated.clone()))],
                &I18nConfig::default(),
            );
            let hyphenated = Locale::new(key.replace('_', "-"));
            prop_assert_eq!(store.translate(Some(&hyphenated), &original), translated.as_str());
        }

        #[test]
        fn missing_entries_pass_through(original in "[^{}]{0,40}", arg in "[a-z]{1,8}") {
            let store = TranslationStore::new(
                vec![("de", Internationalization::new().with_string("Hello!", "Hallo!"))],
                &I18nConfig::default(),
            );
            let de = Locale::new("de");
            prop_assume!(original != "Hello!");
            prop_assert_eq!(store.translate(Some(&de), &original), original.as_str());

            let template = format!("{original}{{0}}");
            let formatted = format_positional(store.translate(Some(&de), &template), &[&arg]).unwrap();
            prop_assert_eq!(formatted, format!("{original}{arg}"));
        }
    }
}
