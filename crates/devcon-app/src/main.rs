//! Developer console desktop host.
//!
//! Reads lines from standard input and, while the console is shown, submits
//! each one to it, rendering output on standard output. Typing the
//! configured toggle key name (F1 by default) on its own line shows or
//! hides the console. The console starts hidden. End of input quits.

mod host;

use anyhow::{Context, Result};

use devcon_terminal::{Console, builtin_registry};
use devcon_types::config::ConsoleConfig;

use host::{StdinEntry, StdoutSink, run_session};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg or DEVCON_CONFIG env var, else defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DEVCON_CONFIG").ok())
    {
        Some(path) => ConsoleConfig::load(&path)
            .with_context(|| format!("failed to load console config from {path}"))?,
        None => ConsoleConfig::default(),
    };

    let registry = builtin_registry().context("failed to register built-in commands")?;
    log::info!("Starting console with {} commands", registry.len());

    let mut console = Console::new(registry, config);
    let mut out = StdoutSink::new();
    let mut entry = StdinEntry;

    run_session(&mut console, std::io::stdin().lock(), &mut out, &mut entry)
        .context("failed to read from stdin")?;

    log::info!("Input closed, shutting down");
    Ok(())
}
