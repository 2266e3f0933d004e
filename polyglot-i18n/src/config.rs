//! Runtime options for an [`I18n`](crate::I18n) instance.

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for locale resolution and ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Prefer the invoking user's locale over the server's.
    pub consider_user_locale: bool,
    /// Skip bundles whose locale key is not a supported tag.
    pub validate_locales: bool,
}

fn flag(value: Option<String>) -> Option<bool> {
    value.map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl I18nConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consider_user_locale(mut self, enabled: bool) -> Self {
        self.consider_user_locale = enabled;
        self
    }

    pub fn validate_locales(mut self, enabled: bool) -> Self {
        self.validate_locales = enabled;
        self
    }

    /// Read `POLYGLOT_CONSIDER_USER_LOCALE` and `POLYGLOT_VALIDATE_LOCALES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injected variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            consider_user_locale: flag(lookup("POLYGLOT_CONSIDER_USER_LOCALE")).unwrap_or(false),
            validate_locales: flag(lookup("POLYGLOT_VALIDATE_LOCALES")).unwrap_or(false),
        }
    }
}
