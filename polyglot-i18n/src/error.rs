//! Error types for i18n operations
//!
//! Missing translations, commands or options are not errors; they resolve to
//! passthrough or "apply nothing". What remains is caller misuse.

use thiserror::Error;

/// Errors that can occur during i18n operations.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Locale tag outside the supported set (strict parsing only)
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Template and arguments disagree
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Translation document could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Positional formatting failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Placeholder index has no matching argument
    #[error("placeholder {{{index}}} has no argument ({provided} provided)")]
    MissingArgument { index: usize, provided: usize },

    /// A `{` without its closing `}`
    #[error("unmatched '{{' at byte {0}")]
    UnmatchedOpen(usize),

    /// A lone `}` that is not part of `}}`
    #[error("single '}}' encountered at byte {0}")]
    UnmatchedClose(usize),

    /// `{}` and `{N}` used in the same template
    #[error("cannot switch between automatic and manual field numbering")]
    MixedNumbering,

    /// Placeholder content other than an index
    #[error("unsupported placeholder '{{{0}}}'")]
    InvalidPlaceholder(String),
}
