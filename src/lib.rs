// Polyglot - localization for chat bot command frameworks
//
// This library translates response strings for the locale of each invocation
// and overlays localized command names and descriptions before commands are
// synchronized to the platform.

// Re-export core functionality
pub use polyglot_i18n::*;

// Re-export logging under its own namespace
pub use polyglot_log as log;

// Prelude for common imports
pub mod prelude {
    pub use polyglot_i18n::prelude::*;
    pub use polyglot_i18n::{
        CommandRegistry, Invocation, LocaleScope, LocalizationReport, Translator, get_text,
        get_text_fmt,
    };
}
