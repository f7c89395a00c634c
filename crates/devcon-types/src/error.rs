//! Error types for the developer console.

use std::io;

/// Errors produced by the developer console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("duplicate command keyword: '{0}'")]
    DuplicateKeyword(String),

    #[error("invalid command keyword: '{0}'")]
    InvalidKeyword(String),

    #[error("{0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;
