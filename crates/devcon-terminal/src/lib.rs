//! Developer console core.
//!
//! The console is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by keyword. The console tokenizes
//! each submitted line, resolves the first token, and dispatches
//! `execute()` with the full token sequence.

mod commands;
mod console;
mod interpreter;
pub mod tokenizer;

/// Register all built-in commands (help, clear, echo, test) into a registry.
pub use commands::register_builtins;
/// Build a registry holding only the built-in commands.
pub use commands::builtin_registry;
/// The line dispatcher.
pub use console::Console;
/// Host line-entry widget collaborator.
pub use console::InputField;
/// Host output collaborator.
pub use console::OutputSink;
/// In-memory output sink.
pub use console::TextBuffer;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// What a command may touch while it runs.
pub use interpreter::Environment;
/// Split an input line into tokens.
pub use tokenizer::tokenize;
