//! Output configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// How query results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One word per line
    Plain,

    /// A JSON array of words
    Json,
}

/// Result rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Whether to sort completions (the tree returns them unordered)
    pub sorted: bool,

    /// Maximum number of completions to print (None for all)
    pub limit: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            sorted: true,
            limit: None,
        }
    }
}

impl OutputConfig {
    /// Applies ordering and the limit to a set of completions.
    pub fn arrange(&self, mut words: Vec<String>) -> Vec<String> {
        if self.sorted {
            words.sort_unstable();
        }
        if let Some(limit) = self.limit {
            words.truncate(limit);
        }
        words
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == Some(0) {
            return Err(ConfigError::ValidationError(
                "limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
