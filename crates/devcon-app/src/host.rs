//! Terminal-backed collaborators for the console.

use std::io::{BufRead, Stdout, Write};

use devcon_terminal::{Console, InputField, OutputSink};

/// ANSI: erase the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Writes console output straight to stdout.
pub struct StdoutSink {
    stdout: Stdout,
}

impl StdoutSink {
    /// Create a sink over the process's stdout.
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }

    fn write(&mut self, text: &str) {
        let mut lock = self.stdout.lock();
        if let Err(e) = lock.write_all(text.as_bytes()).and_then(|()| lock.flush()) {
            log::error!("Failed to write console output: {e}");
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for StdoutSink {
    fn print(&mut self, text: &str) {
        self.write(text);
    }

    fn clear(&mut self) {
        self.write(CLEAR_SCREEN);
    }
}

/// Stdin has no widget to reset; visibility changes are only logged.
#[derive(Default)]
pub struct StdinEntry;

impl InputField for StdinEntry {
    fn reset(&mut self) {
        log::trace!("Input line consumed");
    }

    fn set_visible(&mut self, visible: bool) {
        log::info!("Console {}", if visible { "opened" } else { "closed" });
    }
}

/// Feed every line from `reader` to the console until end of input.
///
/// A line exactly equal to the toggle key shows or hides the console and is
/// never dispatched, even when the console is disabled. Other lines are
/// submitted only while the console is visible.
pub fn run_session(
    console: &mut Console,
    reader: impl BufRead,
    out: &mut dyn OutputSink,
    entry: &mut dyn InputField,
) -> std::io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line == console.config().toggle_key {
            if !console.handle_input(&line, entry) {
                log::debug!("Console disabled, ignoring toggle");
            }
            continue;
        }
        if !console.is_visible() {
            log::debug!("Console hidden, dropping input line");
            continue;
        }
        console.submit(&line, out, entry);
    }
    Ok(())
}
