//! Command Localizer
//!
//! Writes stored name and description localizations onto live command
//! objects. Every write inserts one locale's entry into the command's
//! localization map; entries for other locales are never removed, so
//! applying several locales in any order accumulates them.
//!
//! Nothing here fails. A localization that names a command or option the
//! host does not have is skipped, and the skip is recorded in the
//! [`LocalizationReport`] for callers that care.

use crate::bundle::{CommandLocalization, OptionLocalization};
use crate::command::{overlay, ApplicationCommand, CommandOption, ContextMenuCommand, SlashCommand};
use crate::host::CommandHost;
use crate::locale::Locale;
use crate::store::TranslationStore;
use polyglot_log::debug;

/// What a single apply-to-one call changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Name localizations written, command and options combined
    pub names: usize,
    /// Description localizations written, command and options combined
    pub descriptions: usize,
    /// Option names in the record that the command does not declare
    pub missing_options: Vec<String>,
}

/// A command that can receive localizations.
pub trait Localizable {
    /// Identifier the stored localizations are keyed by.
    fn qualified_name(&self) -> String;

    /// Apply one locale's record to this command.
    fn apply_localization(&mut self, locale: &Locale, record: &CommandLocalization) -> Overlay;
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn localize_option(option: &mut CommandOption, locale: &Locale, record: &OptionLocalization, out: &mut Overlay) {
    if let Some(name) = non_empty(&record.name) {
        overlay(&mut option.name_localizations, locale.as_str(), name);
        out.names += 1;
    }
    if let Some(description) = non_empty(&record.description) {
        overlay(&mut option.description_localizations, locale.as_str(), description);
        out.descriptions += 1;
    }
}

impl Localizable for SlashCommand {
    fn qualified_name(&self) -> String {
        SlashCommand::qualified_name(self)
    }

    fn apply_localization(&mut self, locale: &Locale, record: &CommandLocalization) -> Overlay {
        let mut out = Overlay::default();

        if let Some(name) = non_empty(&record.name) {
            overlay(&mut self.name_localizations, locale.as_str(), name);
            out.names += 1;
        }
        if let Some(description) = non_empty(&record.description) {
            overlay(&mut self.description_localizations, locale.as_str(), description);
            out.descriptions += 1;
        }

        if let Some(options) = &record.options {
            for (option_name, option_record) in options {
                match self.option_mut(option_name) {
                    Some(option) => localize_option(option, locale, option_record, &mut out),
                    None => out.missing_options.push(option_name.clone()),
                }
            }
            out.missing_options.sort();
        }

        out
    }
}

impl Localizable for ContextMenuCommand {
    fn qualified_name(&self) -> String {
        ContextMenuCommand::qualified_name(self)
    }

    fn apply_localization(&mut self, locale: &Locale, record: &CommandLocalization) -> Overlay {
        let mut out = Overlay::default();
        if let Some(name) = non_empty(&record.name) {
            overlay(&mut self.name_localizations, locale.as_str(), name);
            out.names += 1;
        }
        out
    }
}

impl Localizable for ApplicationCommand {
    fn qualified_name(&self) -> String {
        ApplicationCommand::qualified_name(self)
    }

    fn apply_localization(&mut self, locale: &Locale, record: &CommandLocalization) -> Overlay {
        match self {
            ApplicationCommand::Slash(command) => command.apply_localization(locale, record),
            ApplicationCommand::ContextMenu(command) => command.apply_localization(locale, record),
        }
    }
}

/// Outcome of a bulk localization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationReport {
    /// (locale, command) records that found their command
    pub applied: usize,
    /// Records whose command is not pending on the host
    pub missing_commands: Vec<(Locale, String)>,
    /// Records naming options the command does not declare: (locale, command, option)
    pub missing_options: Vec<(Locale, String, String)>,
}

impl LocalizationReport {
    /// Every record found its command and every option.
    pub fn is_complete(&self) -> bool {
        self.missing_commands.is_empty() && self.missing_options.is_empty()
    }
}

/// Apply every stored record for `command`, across all locales.
///
/// Returns the same command, for use at definition time.
pub fn localize<C: Localizable>(store: &TranslationStore, mut command: C) -> C {
    let qualified_name = command.qualified_name();

    for (locale, table) in store.command_localizations() {
        if let Some(record) = table.get(&qualified_name) {
            let applied = command.apply_localization(locale, record);
            for option in applied.missing_options {
                debug!(
                    "Command '{}' has no option '{}' for locale '{}'",
                    qualified_name, option, locale
                );
            }
        }
    }

    command
}

/// Apply every stored record to the host's pending commands.
///
/// Must run before the host synchronizes commands to the platform; once a
/// command is no longer pending it is reported as missing.
pub fn localize_pending<H>(store: &TranslationStore, host: &mut H) -> LocalizationReport
where
    H: CommandHost + ?Sized,
{
    let mut report = LocalizationReport::default();

    for (locale, table) in store.command_localizations() {
        for (qualified_name, record) in table {
            let Some(command) = host.find_pending_mut(qualified_name) else {
                debug!(
                    "No pending command '{}' for locale '{}', skipping",
                    qualified_name, locale
                );
                report
                    .missing_commands
                    .push((locale.clone(), qualified_name.clone()));
                continue;
            };

            let applied = command.apply_localization(locale, record);
            report.applied += 1;

            for option in applied.missing_options {
                debug!(
                    "Command '{}' has no option '{}' for locale '{}'",
                    qualified_name, option, locale
                );
                report
                    .missing_options
                    .push((locale.clone(), qualified_name.clone(), option));
            }
        }
    }

    report.missing_commands.sort();
    report.missing_options.sort();
    report
}
