//! Configuration file loading.

use std::path::Path;
use thiserror::Error;

use super::LogConfig;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file missing or unreadable (includes non-UTF-8 content)
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// Config file is not well-formed JSON
    #[error("failed to parse config file: {0}")]
    Parse(serde_json::Error),

    /// Config document is well-formed JSON of the wrong shape
    #[error("unexpected config shape: {0}")]
    Shape(String),
}

/// Load a configuration document from a UTF-8 JSON file.
///
/// Syntax errors (including truncated documents) report [`ConfigError::Parse`];
/// well-formed JSON that does not fit the schema, such as a top-level array,
/// reports [`ConfigError::Shape`].
pub fn load_from(path: &Path) -> Result<LogConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(classify)
}

fn classify(err: serde_json::Error) -> ConfigError {
    use serde_json::error::Category;
    match err.classify() {
        Category::Syntax | Category::Eof => ConfigError::Parse(err),
        Category::Data => ConfigError::Shape(err.to_string()),
        Category::Io => ConfigError::Read(err.into()),
    }
}
