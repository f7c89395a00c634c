//! Console dispatcher and the host collaborators it talks to.
//!
//! The host owns rendering and input widgets. It hands the console an
//! [`OutputSink`] and an [`InputField`] on every call; the console never
//! stores them and never reads output back.

use devcon_types::config::ConsoleConfig;

use crate::interpreter::{CommandRegistry, Environment};
use crate::tokenizer::tokenize;

/// Destination for console output.
pub trait OutputSink {
    /// Append text without a trailing newline.
    fn print(&mut self, text: &str);

    /// Append text followed by a newline.
    fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    /// Discard everything printed so far.
    fn clear(&mut self);
}

/// The host's line-entry widget.
pub trait InputField {
    /// Clear the entry and give it focus again.
    fn reset(&mut self);

    /// Show or hide the console.
    fn set_visible(&mut self, visible: bool);
}

/// In-memory output sink.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed since the last clear.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Printed text split into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Whether nothing has been printed since the last clear.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl OutputSink for TextBuffer {
    fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn clear(&mut self) {
        self.text.clear();
    }
}

/// Line dispatcher: tokenizes submitted lines and runs the matching command.
pub struct Console {
    registry: CommandRegistry,
    config: ConsoleConfig,
    visible: bool,
}

impl Console {
    /// Create a console over a fully built registry. Starts hidden.
    pub fn new(registry: CommandRegistry, config: ConsoleConfig) -> Self {
        Self {
            registry,
            config,
            visible: false,
        }
    }

    /// The registry commands are resolved from.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Settings the console was created with.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Whether the console is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle one line entered by the operator.
    ///
    /// Echoes the line, runs the command it names, and resets the input
    /// field. Unknown keywords and command failures are reported as a
    /// single line of output; nothing is returned to the caller.
    pub fn submit(&self, line: &str, out: &mut dyn OutputSink, input: &mut dyn InputField) {
        if self.config.echo_input {
            out.println(&format!("{}{line}", self.config.echo_prefix));
        }
        self.dispatch(line, out);
        input.reset();
    }

    fn dispatch(&self, line: &str, out: &mut dyn OutputSink) {
        let args = tokenize(line);
        let Some(keyword) = args.first() else {
            return;
        };

        let Some(cmd) = self.registry.resolve(keyword) else {
            log::warn!("Unknown command '{keyword}'");
            out.println(&format!("'{keyword}' is not a recognized command."));
            return;
        };

        log::debug!("Dispatching '{keyword}' with {} argument(s)", args.len() - 1);
        let mut env = Environment {
            out,
            registry: &self.registry,
        };
        if let Err(e) = cmd.execute(&args, &mut env) {
            log::warn!("Command '{keyword}' failed: {e}");
            env.out.println(&format!("error: {e}"));
        }
    }

    /// Show the console if hidden, hide it if shown.
    pub fn toggle_show(&mut self, input: &mut dyn InputField) {
        self.visible = !self.visible;
        log::debug!("Console {}", if self.visible { "shown" } else { "hidden" });
        input.set_visible(self.visible);
        input.reset();
    }

    /// Feed a named host input. Toggles visibility when it is the
    /// configured toggle key and the console is enabled.
    ///
    /// Returns `true` if the input was consumed.
    pub fn handle_input(&mut self, name: &str, input: &mut dyn InputField) -> bool {
        if !self.config.enabled || name != self.config.toggle_key {
            return false;
        }
        self.toggle_show(input);
        true
    }
}
