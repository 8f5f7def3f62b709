//! loghome - JSON-configured, environment-directed logging bootstrap
//!
//! This library turns a JSON configuration file and an environment-supplied
//! output directory into a fully configured, process-wide logging facility,
//! so that subsequent code can obtain named loggers without repeating setup.
//!
//! # High-Level API
//!
//! ```no_run
//! use loghome::bootstrap::Bootstrap;
//! use loghome::log_info;
//!
//! # fn main() -> Result<(), loghome::bootstrap::BootstrapError> {
//! let (ctx, _guard) = Bootstrap::new("logging.json").initialize()?;
//!
//! let logger = ctx.root();
//! log_info!(logger, "ready");
//! # Ok(())
//! # }
//! ```
//!
//! The bootstrap reads the config, resolves the log directory from
//! `LOG_HOME` (falling back to the OS temp dir), creates it, points the
//! config's file handler at `<dir>/app.log`, and applies everything to the
//! `tracing` backend. All of those knobs are adjustable on
//! [`bootstrap::Bootstrap`], and the backend itself is swappable through
//! the [`backend::LogBackend`] trait.

pub mod backend;
pub mod bootstrap;
pub mod config;
pub mod context;
pub mod level;

pub use backend::{LogBackend, LoggingGuard, NoOpBackend, TracingBackend};
pub use bootstrap::{Bootstrap, BootstrapError};
pub use config::LogConfig;
pub use context::{LoggerHandle, LoggingContext};
pub use level::Level;

/// Version of the loghome library and CLI.
///
/// Synchronized across the workspace; injected at compile time from
/// `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
