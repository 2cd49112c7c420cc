//! Error module for the prefix tree crate.
//!
//! The tree itself is total and never fails. Errors only arise around it:
//! loading configuration, reading dictionaries and rendering CLI output.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the crate.
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum PrefixTreeError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading dictionaries or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when rendering JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
