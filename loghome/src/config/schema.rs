//! Typed configuration document.
//!
//! These are pure data types with no loading or rewriting logic. Every
//! section carries a flattened `extra` map so fields this crate does not
//! interpret still reach the backend intact.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use super::ConfigError;

/// Complete configuration document.
///
/// The top level must be a JSON object; a missing `logging` key yields an
/// empty section rather than a load failure, so that missing-handler
/// detection happens at the rewrite step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// The logging section applied to the backend.
    #[serde(default)]
    pub logging: LoggingSection,
    /// Top-level fields other than `logging`, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The `logging` section of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Root level name ("DEBUG", "INFO", "WARNING", "ERROR").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Handler entries keyed by handler name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub handlers: BTreeMap<String, HandlerSettings>,
    /// Formatter entries, passed through to the backend uninterpreted.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub formatters: BTreeMap<String, Value>,
    /// Per-logger overrides keyed by dotted logger name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub loggers: BTreeMap<String, LoggerSettings>,
    /// Unrecognized section fields, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One handler entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandlerSettings {
    /// Destination file path. The bootstrap rewrites this for the
    /// designated file handler; other handlers keep whatever they declare.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Handler-specific level name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Handler fields this crate does not interpret (class, formatter,
    /// rotation policy, notification targets, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One per-logger override entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Explicit level for this dotted name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Whether records also reach the parent's handlers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate: Option<bool>,
    /// Handler entries attached directly to this logger, by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<String>,
    /// Unrecognized logger fields, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LogConfig {
    /// Rewrite the designated file handler's `filename` to `path`.
    ///
    /// This is the only field the bootstrap mutates. Returns
    /// [`ConfigError::Shape`] when the handler entry is absent.
    pub fn set_file_handler_path(
        &mut self,
        handler: &str,
        path: &Path,
    ) -> Result<(), ConfigError> {
        let entry = self.logging.handlers.get_mut(handler).ok_or_else(|| {
            ConfigError::Shape(format!("missing handler entry 'logging.handlers.{}'", handler))
        })?;
        entry.filename = Some(path.display().to_string());
        Ok(())
    }
}

impl LoggingSection {
    /// Look up a handler's configured filename.
    pub fn handler_filename(&self, handler: &str) -> Option<&str> {
        self.handlers.get(handler)?.filename.as_deref()
    }
}
