//! Main i18n interface.
//!
//! An [`I18n`] owns the translation store and the shared current locale.
//! Constructing one attaches a before-invoke hook to the host so the current
//! locale follows each invocation. Hand the returned `Arc` to whatever needs
//! lookups; [`I18n::install`] additionally publishes it for the free-standing
//! [`get_text`] and [`t!`](crate::t) entry points.

use crate::bundle::Internationalization;
use crate::config::I18nConfig;
use crate::context::{resolve_locale, CurrentLocale, LocaleScope, Translator};
use crate::format::format_positional;
use crate::host::{CommandHost, InvocationContext};
use crate::locale::Locale;
use crate::localizer::{self, Localizable, LocalizationReport};
use crate::store::TranslationStore;
use crate::Result;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use polyglot_log::debug;
use std::fmt::Display;
use std::sync::Arc;

static ACTIVE: Lazy<RwLock<Option<Arc<I18n>>>> = Lazy::new(|| RwLock::new(None));

/// Translations and locale tracking for one bot.
#[derive(Debug)]
pub struct I18n {
    store: TranslationStore,
    config: I18nConfig,
    current: CurrentLocale,
}

impl I18n {
    /// Build the store and attach the before-invoke hook to `bot`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyglot_i18n::{CommandRegistry, I18n, I18nConfig, Internationalization, Invocation};
    ///
    /// let mut bot = CommandRegistry::new();
    /// let i18n = I18n::new(
    ///     &mut bot,
    ///     I18nConfig::default(),
    ///     [("de", Internationalization::new().with_string("Hello!", "Hallo!"))],
    /// );
    ///
    /// bot.invoke(&Invocation::new("greet").with_guild_locale("de"));
    /// assert_eq!(i18n.get_text("Hello!"), "Hallo!");
    /// assert_eq!(i18n.get_text("Bye!"), "Bye!");
    /// ```
    pub fn new<H, I, K>(bot: &mut H, config: I18nConfig, translations: I) -> Arc<Self>
    where
        H: CommandHost + ?Sized,
        I: IntoIterator<Item = (K, Internationalization)>,
        K: AsRef<str>,
    {
        let i18n = Arc::new(Self::detached(config, translations));

        let hook_target = Arc::clone(&i18n);
        bot.before_invoke(Arc::new(move |ctx: &dyn InvocationContext| {
            hook_target.set_current_locale(ctx);
        }));

        debug!(
            "Loaded translations for {} locales",
            i18n.store.locales().len()
        );
        i18n
    }

    /// Build without attaching to a host; the current locale only changes
    /// through [`set_current_locale`](Self::set_current_locale).
    pub fn detached<I, K>(config: I18nConfig, translations: I) -> Self
    where
        I: IntoIterator<Item = (K, Internationalization)>,
        K: AsRef<str>,
    {
        Self {
            store: TranslationStore::new(translations, &config),
            config,
            current: CurrentLocale::new(),
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// Apply every stored localization for `command` and hand it back.
    pub fn localize<C: Localizable>(&self, command: C) -> C {
        localizer::localize(&self.store, command)
    }

    /// Apply stored localizations to all of the host's pending commands.
    ///
    /// This does not push anything to the platform; call it after every
    /// command is defined and before the host synchronizes them.
    pub fn localize_commands<H>(&self, bot: &mut H) -> LocalizationReport
    where
        H: CommandHost + ?Sized,
    {
        let report = localizer::localize_pending(&self.store, bot);
        debug!(
            "Localized {} command records, {} commands and {} options not found",
            report.applied,
            report.missing_commands.len(),
            report.missing_options.len()
        );
        report
    }

    /// Update the shared current locale from an invocation.
    ///
    /// Leaves the previous value in place if the invocation has no usable
    /// locale.
    pub fn set_current_locale(&self, ctx: &dyn InvocationContext) {
        self.current.update(ctx, self.config.consider_user_locale);
    }

    pub fn current_locale(&self) -> Option<Locale> {
        self.current.get()
    }

    /// Translate `original` for the current locale, or return it unchanged.
    pub fn get_text(&self, original: &str) -> String {
        let locale = self.current.get();
        self.store.translate(locale.as_ref(), original).to_string()
    }

    /// Translate for the current locale, then substitute positional arguments.
    ///
    /// Formatting is skipped when `args` is empty.
    pub fn get_text_fmt(&self, original: &str, args: &[&dyn Display]) -> Result<String> {
        let text = self.get_text(original);
        if args.is_empty() {
            return Ok(text);
        }
        Ok(format_positional(&text, args)?)
    }

    /// Lookup handle bound to this invocation's own locale.
    ///
    /// Unlike [`get_text`](Self::get_text), this never reads the shared
    /// current locale, so concurrent invocations stay isolated. An invocation
    /// with no usable locale gets untranslated text.
    pub fn scope(&self, ctx: &dyn InvocationContext) -> LocaleScope {
        LocaleScope::new(resolve_locale(ctx, self.config.consider_user_locale))
    }

    /// Borrowing translator for an already-resolved locale.
    pub fn translator_for<'a>(&'a self, locale: Option<&'a Locale>) -> Translator<'a> {
        Translator::new(&self.store, locale)
    }

    /// Publish this instance for [`get_text`] and [`t!`](crate::t).
    ///
    /// The last installed instance wins.
    pub fn install(self: &Arc<Self>) {
        *ACTIVE.write() = Some(Arc::clone(self));
    }
}

/// The installed instance, if any.
pub fn active() -> Option<Arc<I18n>> {
    ACTIVE.read().clone()
}

/// Remove the installed instance.
pub fn uninstall() -> Option<Arc<I18n>> {
    ACTIVE.write().take()
}

/// Translate through the installed instance.
///
/// Without an installed instance the string is returned unchanged.
pub fn get_text(original: &str) -> String {
    match active() {
        Some(i18n) => i18n.get_text(original),
        None => original.to_string(),
    }
}

/// Translate and format through the installed instance.
pub fn get_text_fmt(original: &str, args: &[&dyn Display]) -> Result<String> {
    match active() {
        Some(i18n) => i18n.get_text_fmt(original, args),
        None if args.is_empty() => Ok(original.to_string()),
        None => Ok(format_positional(original, args)?),
    }
}

/// Translate through the installed instance.
///
/// `t!("text")` returns a `String`; `t!("text {0}", arg, ...)` formats and
/// returns `Result<String>`.
///
/// ```
/// use polyglot_i18n::t;
///
/// let plain: String = t!("Bye!");
/// let formatted = t!("Hi {0}", "Sam").unwrap();
/// # let _ = (plain, formatted);
/// ```
#[macro_export]
macro_rules! t {
    ($original:expr $(,)?) => {
        $crate::get_text($original)
    };
    ($original:expr, $($arg:expr),+ $(,)?) => {
        $crate::get_text_fmt($original, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
