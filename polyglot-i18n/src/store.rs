//! Translation Store
//!
//! Per-locale string tables and command localizations, ingested once from
//! caller-supplied bundles and read-only afterwards.

use crate::bundle::{CommandTable, Internationalization, StringTable};
use crate::config::I18nConfig;
use crate::locale::Locale;
use polyglot_log::{debug, warn};
use std::collections::HashMap;

/// Immutable translation data keyed by normalized locale.
///
/// A locale only appears in a mapping if its bundle supplied a non-empty
/// section for it; there are no empty placeholder entries.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    translations: HashMap<Locale, StringTable>,
    localizations: HashMap<Locale, CommandTable>,
}

impl TranslationStore {
    /// Ingest bundles keyed by locale. Never fails.
    ///
    /// With [`I18nConfig::validate_locales`] set, bundles for unsupported
    /// tags are skipped instead of stored.
    pub fn new<I, K>(translations: I, config: &I18nConfig) -> Self
    where
        I: IntoIterator<Item = (K, Internationalization)>,
        K: AsRef<str>,
    {
        let mut store = Self::default();

        for (key, bundle) in translations {
            let locale = Locale::new(key);

            if !locale.is_supported() {
                if config.validate_locales {
                    warn!("Skipping translations for unsupported locale '{}'", locale);
                    continue;
                }
                debug!("Accepting translations for unlisted locale '{}'", locale);
            }

            if let Some(strings) = bundle.strings.filter(|s| !s.is_empty()) {
                debug!("Registered {} strings for '{}'", strings.len(), locale);
                store.translations.insert(locale.clone(), strings);
            }

            if let Some(commands) = bundle.commands.filter(|c| !c.is_empty()) {
                debug!("Registered {} command localizations for '{}'", commands.len(), locale);
                store.localizations.insert(locale, commands);
            }
        }

        store
    }

    /// String table for a locale, if one was registered.
    pub fn string_table(&self, locale: &str) -> Option<&StringTable> {
        self.translations.get(locale)
    }

    /// Command localizations for a locale, if any were registered.
    pub fn command_table(&self, locale: &str) -> Option<&CommandTable> {
        self.localizations.get(locale)
    }

    /// Every locale with command localizations, paired with its table.
    pub fn command_localizations(&self) -> impl Iterator<Item = (&Locale, &CommandTable)> {
        self.localizations.iter()
    }

    /// Every locale present in either mapping, sorted.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self
            .translations
            .keys()
            .chain(self.localizations.keys())
            .collect();
        locales.sort();
        locales.dedup();
        locales
    }

    /// Translated text for `original`, or `original` itself.
    ///
    /// An absent locale, a missing table, a missing entry and an empty
    /// translation all fall through to the original string.
    pub fn translate<'a>(&'a self, locale: Option<&Locale>, original: &'a str) -> &'a str {
        locale
            .and_then(|locale| self.translations.get(locale))
            .and_then(|table| table.get(original))
            .map(String::as_str)
            .filter(|translated| !translated.is_empty())
            .unwrap_or(original)
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty() && self.localizations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::CommandLocalization;

    fn store(config: &I18nConfig) -> TranslationStore {
        TranslationStore::new(
            vec![
                ("de", Internationalization::new().with_string("Hello!", "Hallo!")),
                (
                    "en_GB",
                    Internationalization::new()
                        .with_command("color", CommandLocalization::new().with_name("colour")),
                ),
                ("fr", Internationalization::new()),
                ("tlh", Internationalization::new().with_string("Hello!", "nuqneH")),
            ],
            config,
        )
    }

    #[test]
    fn test_sections_registered_independently() {
        let store = store(&I18nConfig::default());

        assert!(store.string_table("de").is_some());
        assert!(store.command_table("de").is_none());
        assert!(store.string_table("en-GB").is_none());
        assert!(store.command_table("en-GB").is_some());
    }

    #[test]
    fn test_empty_sections_not_stored() {
        let store = TranslationStore::new(
            vec![(
                "fr",
                Internationalization {
                    strings: Some(StringTable::new()),
                    commands: Some(CommandTable::new()),
                },
            )],
            &I18nConfig::default(),
        );

        assert!(store.is_empty());
        assert!(store.locales().is_empty());
    }

    #[test]
    fn test_underscore_keys_normalized() {
        let store = store(&I18nConfig::default());
        assert!(store.command_table("en_GB").is_none());
        assert_eq!(
            store.command_table("en-GB").unwrap()["color"].name.as_deref(),
            Some("colour")
        );
    }

    #[test]
    fn test_unlisted_locale_accepted_by_default() {
        let store = store(&I18nConfig::default());
        assert_eq!(store.translate(Some(&Locale::new("tlh")), "Hello!"), "nuqneH");
        assert_eq!(store.locales().len(), 3);
    }

    #[test]
    fn test_unlisted_locale_skipped_when_validating() {
        let store = store(&I18nConfig::new().validate_locales(true));
        assert!(store.string_table("tlh").is_none());
        assert_eq!(store.translate(Some(&Locale::new("tlh")), "Hello!"), "Hello!");
        assert!(store.string_table("de").is_some());
    }

    #[test]
    fn test_translate_passthrough() {
        let store = store(&I18nConfig::default());
        let de = Locale::new("de");

        assert_eq!(store.translate(Some(&de), "Hello!"), "Hallo!");
        assert_eq!(store.translate(Some(&de), "Bye!"), "Bye!");
        assert_eq!(store.translate(Some(&Locale::new("ja")), "Hello!"), "Hello!");
        assert_eq!(store.translate(None, "Hello!"), "Hello!");
    }

    #[test]
    fn test_empty_translation_is_passthrough() {
        let store = TranslationStore::new(
            vec![("de", Internationalization::new().with_string("Hello!", ""))],
            &I18nConfig::default(),
        );
        assert_eq!(store.translate(Some(&Locale::new("de")), "Hello!"), "Hello!");
    }
}
