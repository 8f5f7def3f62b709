//! Logging configuration: typed document model and JSON loading.
//!
//! The configuration is a JSON document with a `logging` section holding
//! handlers, formatters, per-logger overrides, and a root level. Only the
//! file handler's `filename` field is ever rewritten programmatically;
//! everything else is passed through to the backend unmodified. Fields the
//! schema does not name are preserved in open extension maps.
//!
//! Schema types live in [`schema`], file loading and the error taxonomy in
//! [`loader`].

mod loader;
mod schema;

pub use loader::{load_from, ConfigError};
pub use schema::{HandlerSettings, LogConfig, LoggerSettings, LoggingSection};
