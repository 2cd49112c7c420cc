//! Dictionary configuration module.
//!
//! Controls how word lists are read into a prefix tree.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word list to load, one word per line (None for an empty tree)
    pub path: Option<PathBuf>,

    /// Lines starting with this prefix are skipped (empty disables comments)
    pub comment_prefix: String,

    /// Whether to strip surrounding whitespace from each line
    pub trim_whitespace: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            comment_prefix: "#".to_string(),
            trim_whitespace: true,
        }
    }
}

impl DictionaryConfig {
    /// Returns `true` if `line` is a comment under this configuration.
    pub fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix)
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.comment_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not contain whitespace".to_string(),
            ));
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
