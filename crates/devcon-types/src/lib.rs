//! Foundation types for the developer console.
//!
//! This crate contains the types shared by every devcon crate: the error
//! enum with its `Result` alias, and the console configuration.

pub mod config;
pub mod error;
