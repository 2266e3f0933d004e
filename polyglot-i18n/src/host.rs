//! Host Framework Interfaces
//!
//! The narrow surface this crate needs from a bot framework: a hook that runs
//! before every command, access to commands that have not been synchronized
//! to the platform yet, and an invocation context carrying locales.
//!
//! [`CommandRegistry`] is a complete in-memory host for tests and for
//! frameworks that hand commands over as plain data.

use crate::command::ApplicationCommand;
use polyglot_log::debug;
use std::sync::Arc;

/// Locale information available while a command is being invoked.
pub trait InvocationContext {
    /// Locale of the invoking user, if the platform sent one.
    fn locale(&self) -> Option<&str>;

    /// Preferred locale of the server the command was invoked in.
    fn guild_locale(&self) -> Option<&str>;
}

/// Callback run by the host immediately before it executes a command.
pub type BeforeInvokeHook = Arc<dyn Fn(&dyn InvocationContext) + Send + Sync>;

/// A bot framework this crate can attach to.
pub trait CommandHost {
    /// Register a callback to run before every command.
    fn before_invoke(&mut self, hook: BeforeInvokeHook);

    /// Commands defined locally but not yet pushed to the platform.
    fn pending_commands_mut(&mut self) -> &mut [ApplicationCommand];

    /// Pending command with exactly this qualified name.
    fn find_pending_mut(&mut self, qualified_name: &str) -> Option<&mut ApplicationCommand> {
        self.pending_commands_mut()
            .iter_mut()
            .find(|c| c.qualified_name() == qualified_name)
    }
}

/// A plain invocation context value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub locale: Option<String>,
    pub guild_locale: Option<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_guild_locale(mut self, locale: impl Into<String>) -> Self {
        self.guild_locale = Some(locale.into());
        self
    }
}

impl InvocationContext for Invocation {
    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn guild_locale(&self) -> Option<&str> {
        self.guild_locale.as_deref()
    }
}

/// In-memory command host.
#[derive(Default)]
pub struct CommandRegistry {
    pending: Vec<ApplicationCommand>,
    synced: Vec<ApplicationCommand>,
    hooks: Vec<BeforeInvokeHook>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("pending", &self.pending.len())
            .field("synced", &self.synced.len())
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a command; it stays pending until [`sync_commands`](Self::sync_commands).
    pub fn add_command(&mut self, command: impl Into<ApplicationCommand>) -> &mut Self {
        self.pending.push(command.into());
        self
    }

    pub fn pending_commands(&self) -> &[ApplicationCommand] {
        &self.pending
    }

    pub fn synced_commands(&self) -> &[ApplicationCommand] {
        &self.synced
    }

    /// Synchronized command with exactly this qualified name.
    pub fn synced(&self, qualified_name: &str) -> Option<&ApplicationCommand> {
        self.synced
            .iter()
            .find(|c| c.qualified_name() == qualified_name)
    }

    /// Push every pending command to the platform.
    ///
    /// Returns how many commands were synchronized.
    pub fn sync_commands(&mut self) -> usize {
        let count = self.pending.len();
        self.synced.append(&mut self.pending);
        debug!("Synchronized {} commands", count);
        count
    }

    /// Run every before-invoke hook, in registration order.
    pub fn invoke(&self, ctx: &dyn InvocationContext) {
        for hook in &self.hooks {
            hook(ctx);
        }
    }
}

impl CommandHost for CommandRegistry {
    fn before_invoke(&mut self, hook: BeforeInvokeHook) {
        self.hooks.push(hook);
    }

    fn pending_commands_mut(&mut self) -> &mut [ApplicationCommand] {
        &mut self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ContextMenuCommand, SlashCommand};
    use parking_lot::Mutex;

    #[test]
    fn test_find_pending_by_qualified_name() {
        let mut registry = CommandRegistry::new();
        registry
            .add_command(SlashCommand::new("set", "Set").in_group("config"))
            .add_command(ContextMenuCommand::user("Profile"));

        assert!(registry.find_pending_mut("config set").is_some());
        assert!(registry.find_pending_mut("set").is_none());
        assert!(registry.find_pending_mut("Profile").is_some());
    }

    #[test]
    fn test_sync_moves_pending() {
        let mut registry = CommandRegistry::new();
        registry.add_command(SlashCommand::new("help", "Help"));

        assert_eq!(registry.sync_commands(), 1);
        assert!(registry.pending_commands().is_empty());
        assert!(registry.synced("help").is_some());
        assert!(registry.find_pending_mut("help").is_none());
    }

    #[test]
    fn test_hooks_run_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CommandRegistry::new();

        for id in 0..2 {
            let seen = Arc::clone(&seen);
            registry.before_invoke(Arc::new(move |ctx: &dyn InvocationContext| {
                seen.lock().push((id, ctx.guild_locale().map(str::to_string)));
            }));
        }

        registry.invoke(&Invocation::new("help").with_guild_locale("de"));

        assert_eq!(
            *seen.lock(),
            vec![(0, Some("de".to_string())), (1, Some("de".to_string()))]
        );
    }
}
