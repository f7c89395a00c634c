//! Command trait, environment, and registry.

use std::collections::HashMap;

use devcon_types::error::{ConsoleError, Result};

use crate::console::OutputSink;

/// Everything a command may touch while it runs.
pub struct Environment<'a> {
    /// Where the command writes its output.
    pub out: &'a mut dyn OutputSink,
    /// The registry the command was resolved from (read-only).
    pub registry: &'a CommandRegistry,
}

/// A single executable command.
pub trait Command {
    /// The keyword that invokes the command (case-sensitive).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "echo \[text\]").
    fn usage(&self) -> &str;

    /// Execute the command.
    ///
    /// `args` is the full token sequence; `args[0]` is the keyword itself.
    /// Argument checking is up to the command.
    fn execute(&self, args: &[String], env: &mut Environment<'_>) -> Result<()>;
}

/// Mapping from keyword to command.
///
/// Populated once at startup and read-only afterwards. Registering a
/// keyword twice is rejected rather than silently replacing the first
/// command.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an explicit list of commands.
    ///
    /// Fails on the first command that cannot be registered.
    pub fn from_commands<I>(commands: I) -> Result<Self>
    where
        I: IntoIterator<Item = Box<dyn Command>>,
    {
        let mut reg = Self::new();
        for cmd in commands {
            reg.register(cmd)?;
        }
        Ok(reg)
    }

    /// Register a command.
    ///
    /// Rejects keywords that can never come out of the tokenizer (empty,
    /// containing `"`, or with surrounding whitespace) and keywords that are
    /// already registered. Inner spaces are fine: a quoted first token keeps
    /// them. The registry is unchanged on error.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        let name = cmd.name().to_string();
        if name.is_empty() || name.contains('"') || name.trim() != name {
            log::error!("Rejected command with invalid keyword {name:?}");
            return Err(ConsoleError::InvalidKeyword(name));
        }
        if self.commands.contains_key(&name) {
            log::error!("Rejected duplicate command keyword '{name}'");
            return Err(ConsoleError::DuplicateKeyword(name));
        }
        self.commands.insert(name, cmd);
        Ok(())
    }

    /// Look up a command by exact, case-sensitive keyword.
    pub fn resolve(&self, keyword: &str) -> Option<&dyn Command> {
        self.commands.get(keyword).map(|cmd| cmd.as_ref())
    }

    /// Whether a command is registered under `keyword`.
    pub fn contains(&self, keyword: &str) -> bool {
        self.commands.contains_key(keyword)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }
}
