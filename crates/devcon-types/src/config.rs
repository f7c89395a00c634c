//! Console configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty document (or no
//! file at all) yields a usable console.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Runtime settings for the console and its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// If the console can be shown (and so used) at all.
    pub enabled: bool,
    /// Host input name that opens and closes the console.
    ///
    /// Matched exactly. Hosts that take the toggle from the same text
    /// stream as commands consume it before dispatch, so a command
    /// registered under this name is unreachable there.
    pub toggle_key: String,
    /// Echo each submitted line back to the output sink.
    pub echo_input: bool,
    /// Marker printed before an echoed line.
    pub echo_prefix: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            toggle_key: "F1".to_string(),
            echo_input: true,
            echo_prefix: "> ".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&src)?;
        log::debug!("Loaded console config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.echo_prefix.contains(['\n', '\r']) {
            return Err(ConsoleError::Config(
                "echo_prefix must not contain a line break".to_string(),
            ));
        }
        if self.toggle_key.trim().is_empty() {
            return Err(ConsoleError::Config("toggle_key must not be empty".to_string()));
        }
        Ok(())
    }
}
