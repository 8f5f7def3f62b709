//! Logging bootstrap.
//!
//! One blocking call made at process start, before anything else logs:
//! reads a JSON configuration, resolves the log directory from the
//! environment, rewrites the file handler's destination path, and applies
//! the result to the backend. Everything after that goes through the
//! returned [`LoggingContext`].
//!
//! ```no_run
//! use loghome::bootstrap::Bootstrap;
//! use loghome::log_info;
//!
//! # fn main() -> Result<(), loghome::bootstrap::BootstrapError> {
//! let (ctx, _guard) = Bootstrap::new("logging.json")
//!     .with_env_var("LOG_HOME")
//!     .with_log_file_name("app.log")
//!     .initialize()?;
//!
//! let logger = ctx.root();
//! log_info!(logger, "logging configured");
//!
//! let child = logger.child("startup");
//! log_info!(child, "components coming up");
//! # Ok(())
//! # }
//! ```

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::{BackendError, LogBackend, LoggingGuard, TracingBackend};
use crate::config::{self, ConfigError, LogConfig};
use crate::context::LoggingContext;

/// Environment variable consulted for the log root directory.
pub const DEFAULT_ENV_VAR: &str = "LOG_HOME";

/// File name appended to the resolved directory.
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Handler entry whose `filename` field is rewritten.
pub const DEFAULT_FILE_HANDLER: &str = "file_handler";

/// Bootstrap failures. All are fatal to initialization; none are retried.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Config unreadable, malformed, or of the wrong shape
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Log directory could not be created (already existing is not a failure)
    #[error("failed to create log directory: {0}")]
    DirectoryCreate(std::io::Error),

    /// Backend rejected the configuration
    #[error(transparent)]
    Backend(#[from] BackendError),
}

enum ConfigSource {
    File(PathBuf),
    Inline(LogConfig),
}

/// Bootstrap options.
///
/// Built with defaults from a config source, customized with `with_*`
/// methods, consumed by [`initialize`](Bootstrap::initialize).
pub struct Bootstrap {
    source: ConfigSource,
    env_var: String,
    default_log_root: PathBuf,
    log_file_name: String,
    file_handler: String,
}

impl Bootstrap {
    /// Bootstrap from a JSON config file.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self::with_source(ConfigSource::File(config_path.into()))
    }

    /// Bootstrap from an already built configuration document.
    pub fn from_config(config: LogConfig) -> Self {
        Self::with_source(ConfigSource::Inline(config))
    }

    fn with_source(source: ConfigSource) -> Self {
        Self {
            source,
            env_var: DEFAULT_ENV_VAR.to_string(),
            default_log_root: env::temp_dir(),
            log_file_name: DEFAULT_LOG_FILE.to_string(),
            file_handler: DEFAULT_FILE_HANDLER.to_string(),
        }
    }

    /// Environment variable holding the log root directory.
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Directory used when the environment variable is unset.
    pub fn with_default_log_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.default_log_root = root.into();
        self
    }

    /// Name of the log file inside the resolved directory.
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Name of the handler entry whose `filename` is rewritten.
    pub fn with_file_handler(mut self, name: impl Into<String>) -> Self {
        self.file_handler = name.into();
        self
    }

    /// The directory log output goes to: the environment variable's value
    /// when set, the default root otherwise.
    pub fn resolve_log_dir(&self) -> PathBuf {
        env::var_os(&self.env_var)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.default_log_root.clone())
    }

    /// The full log file path the file handler will be pointed at.
    pub fn resolve_log_path(&self) -> PathBuf {
        self.resolve_log_dir().join(&self.log_file_name)
    }

    /// Run the bootstrap against the production tracing backend.
    ///
    /// Intended to be called exactly once per process, from a single thread,
    /// before any other thread logs. A second call fails with
    /// [`BootstrapError::Backend`] because the global tracing subscriber is
    /// already installed.
    ///
    /// The returned guard must be kept alive for the duration of logging;
    /// dropping it flushes the file writer.
    pub fn initialize(self) -> Result<(LoggingContext, LoggingGuard), BootstrapError> {
        self.initialize_with(Arc::new(TracingBackend::new()))
    }

    /// Run the bootstrap against a caller-supplied backend.
    ///
    /// Steps, in order: parse the config, resolve and create the log
    /// directory, rewrite the file handler path, validate level names, apply
    /// to the backend. Parse failures happen before any directory is
    /// created; a structurally valid config that merely lacks the file
    /// handler entry fails after the directory already exists.
    pub fn initialize_with(
        self,
        backend: Arc<dyn LogBackend>,
    ) -> Result<(LoggingContext, LoggingGuard), BootstrapError> {
        let mut config = match &self.source {
            ConfigSource::File(path) => config::load_from(path)?,
            ConfigSource::Inline(config) => config.clone(),
        };

        let log_dir = self.resolve_log_dir();
        fs::create_dir_all(&log_dir).map_err(BootstrapError::DirectoryCreate)?;

        let log_path = log_dir.join(&self.log_file_name);
        config.set_file_handler_path(&self.file_handler, &log_path)?;

        let context = LoggingContext::from_section(Arc::clone(&backend), &config.logging)
            .map_err(|e| ConfigError::Shape(e.to_string()))?;
        let guard = backend.apply(&config.logging, &self.file_handler)?;

        Ok((context, guard))
    }
}
