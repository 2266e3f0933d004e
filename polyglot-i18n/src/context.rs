//! Locale Context
//!
//! Decides which locale applies to an invocation, and offers two ways to
//! carry that decision to string lookups:
//!
//! - [`CurrentLocale`]: one shared slot, overwritten before every command.
//!   Invocations processed concurrently can observe each other's locale.
//! - [`Translator`]: a handle scoped to a single invocation that carries its
//!   own resolved locale and never reads the shared slot.

use crate::format::format_positional;
use crate::host::InvocationContext;
use crate::locale::Locale;
use crate::store::TranslationStore;
use crate::Result;
use parking_lot::RwLock;
use polyglot_log::trace;
use std::fmt::Display;

/// Effective locale for an invocation.
///
/// When `consider_user_locale` is set, the user's locale wins over the
/// server's; otherwise only the server's locale is consulted. `None` means
/// the context carried nothing usable.
pub fn resolve_locale(ctx: &dyn InvocationContext, consider_user_locale: bool) -> Option<Locale> {
    let user = ctx.locale().filter(|t| !t.is_empty());
    let guild = ctx.guild_locale().filter(|t| !t.is_empty());

    let tag = if consider_user_locale { user.or(guild) } else { guild };
    tag.map(Locale::new)
}

/// Shared, last-write-wins current locale.
#[derive(Debug, Default)]
pub struct CurrentLocale {
    slot: RwLock<Option<Locale>>,
}

impl CurrentLocale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `ctx` and store the result.
    ///
    /// When nothing resolves, the previous value stays in place.
    pub fn update(&self, ctx: &dyn InvocationContext, consider_user_locale: bool) {
        match resolve_locale(ctx, consider_user_locale) {
            Some(locale) => {
                trace!("Current locale set to '{}'", locale);
                *self.slot.write() = Some(locale);
            }
            None => trace!("Invocation carried no locale, keeping previous value"),
        }
    }

    pub fn get(&self) -> Option<Locale> {
        self.slot.read().clone()
    }

    pub fn set(&self, locale: Option<Locale>) {
        *self.slot.write() = locale;
    }
}

/// String lookup bound to one invocation's locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    store: &'a TranslationStore,
    locale: Option<&'a Locale>,
}

/// Owned-locale form of [`Translator`], for handing across tasks.
#[derive(Debug, Clone)]
pub struct LocaleScope {
    pub locale: Option<Locale>,
}

impl LocaleScope {
    pub fn new(locale: Option<Locale>) -> Self {
        Self { locale }
    }

    /// Borrow a translator over `store` for this scope's locale.
    pub fn translator<'a>(&'a self, store: &'a TranslationStore) -> Translator<'a> {
        Translator::new(store, self.locale.as_ref())
    }
}

impl<'a> Translator<'a> {
    pub fn new(store: &'a TranslationStore, locale: Option<&'a Locale>) -> Self {
        Self { store, locale }
    }

    pub fn locale(&self) -> Option<&'a Locale> {
        self.locale
    }

    /// Translated text, or `original` unchanged.
    pub fn text(&self, original: &'a str) -> &'a str {
        self.store.translate(self.locale, original)
    }

    /// Translated text with positional arguments substituted.
    ///
    /// With no arguments the text is returned without formatting, so literal
    /// braces in it are left alone.
    pub fn text_fmt(&self, original: &str, args: &[&dyn Display]) -> Result<String> {
        let text = self.store.translate(self.locale, original);
        if args.is_empty() {
            return Ok(text.to_string());
        }
        Ok(format_positional(text, args)?)
    }
}
