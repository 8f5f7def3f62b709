//! Tracing ecosystem adapter.

use std::fmt::Arguments;
use std::io;
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::{BackendError, LogBackend, LoggingGuard};
use crate::config::LoggingSection;
use crate::level::Level;

/// Handler entry that, when present, enables a stdout layer alongside the
/// file layer.
pub const CONSOLE_HANDLER: &str = "console_handler";

/// Backend that delegates to the `tracing` crate.
///
/// Applying a configuration installs a global subscriber with a non-blocking
/// file writer at the configured filename, an optional stdout layer when the
/// configuration declares a console handler, and a level filter taken from
/// the configuration's root level (overridable via `RUST_LOG`).
///
/// The global default subscriber can only be installed once per process;
/// a second `apply` fails with [`BackendError::Apply`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create a new tracing backend adapter.
    pub fn new() -> Self {
        Self
    }
}

impl LogBackend for TracingBackend {
    fn apply(
        &self,
        section: &LoggingSection,
        file_handler: &str,
    ) -> Result<LoggingGuard, BackendError> {
        let filename = section
            .handler_filename(file_handler)
            .ok_or_else(|| BackendError::MissingFilename(file_handler.to_string()))?;

        let path = Path::new(filename);
        let (dir, file) = match (path.parent(), path.file_name()) {
            (Some(dir), Some(file)) if !dir.as_os_str().is_empty() => (dir, file),
            (_, Some(file)) => (Path::new("."), file),
            _ => {
                return Err(BackendError::Apply(format!(
                    "'{}' is not a valid log file path",
                    filename
                )))
            }
        };

        let file_appender = tracing_appender::rolling::never(dir, file);
        let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        // Stdout layer only when the configuration asks for one.
        let stdout_layer = section
            .handlers
            .contains_key(CONSOLE_HANDLER)
            .then(|| tracing_subscriber::fmt::layer().with_writer(io::stdout));

        let directive = filter_floor(section).as_filter_directive();
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(stdout_layer)
            .try_init()
            .map_err(|e| BackendError::Apply(e.to_string()))?;

        Ok(LoggingGuard::from_worker(file_guard))
    }

    fn emit(&self, name: &str, level: Level, args: Arguments<'_>) {
        let logger = if name.is_empty() { "root" } else { name };
        match level {
            Level::Debug => tracing::debug!(logger = logger, "{}", args),
            Level::Info => tracing::info!(logger = logger, "{}", args),
            Level::Warning => tracing::warn!(logger = logger, "{}", args),
            Level::Error => tracing::error!(logger = logger, "{}", args),
        }
    }
}

/// Most verbose level any logger in the section may emit at.
///
/// The subscriber-side filter is global, so it must not be stricter than the
/// most verbose per-logger override; the per-logger ceilings are enforced on
/// the handle side before `emit` is reached.
fn filter_floor(section: &LoggingSection) -> Level {
    let mut floor = section
        .level
        .as_deref()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::Warning);
    for settings in section.loggers.values() {
        if let Some(level) = settings.level.as_deref().and_then(|s| s.parse::<Level>().ok()) {
            floor = floor.min(level);
        }
    }
    floor
}
