//! Locale tags
//!
//! A [`Locale`] is an opaque, normalized tag. Normalization only rewrites
//! `_` separators to `-`, so `"en_US"` and `"en-US"` name the same locale.
//! Validation against [`SUPPORTED_LOCALES`] happens only in [`Locale::parse`].

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Locale tags accepted by the chat platform for command localizations.
pub const SUPPORTED_LOCALES: &[&str] = &[
    "da", "de", "en-GB", "en-US", "es-ES", "fr", "hr", "it", "lt", "hu", "nl", "no", "pl", "pt-BR",
    "ro", "fi", "sv-SE", "vi", "tr", "cs", "el", "bg", "ru", "uk", "hi", "th", "zh-CN", "ja",
    "zh-TW", "ko",
];

/// Normalize a locale key by converting underscore separators to hyphens.
pub fn normalize_tag(tag: &str) -> String {
    tag.replace('_', "-")
}

/// A normalized locale tag.
///
/// # Examples
///
/// ```
/// use polyglot_i18n::Locale;
///
/// let loose = Locale::new("pt_BR");
/// assert_eq!(loose.as_str(), "pt-BR");
/// assert!(loose.is_supported());
///
/// assert!(Locale::parse("xx_YY").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Create a locale from any tag. Never fails.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(normalize_tag(tag.as_ref()))
    }

    /// Create a locale, rejecting tags outside [`SUPPORTED_LOCALES`].
    pub fn parse(tag: &str) -> Result<Self> {
        let locale = Self::new(tag);
        if locale.is_supported() {
            Ok(locale)
        } else {
            Err(I18nError::InvalidLocale(tag.to_string()))
        }
    }

    /// The normalized tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag is one of [`SUPPORTED_LOCALES`].
    pub fn is_supported(&self) -> bool {
        SUPPORTED_LOCALES.contains(&self.0.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}
