//! Backend trait definition.

use std::fmt::Arguments;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingSection;
use crate::level::Level;

/// Errors applying a configuration to a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Designated file handler has no filename to write to
    #[error("handler '{0}' has no filename configured")]
    MissingFilename(String),

    /// Backend rejected the configuration (e.g. a global subscriber is
    /// already installed for this process)
    #[error("failed to apply logging configuration: {0}")]
    Apply(String),
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping the guard flushes and closes the backend's file writer. Backends
/// without buffered writers return an empty guard.
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Guard for backends with nothing to flush.
    pub fn none() -> Self {
        Self { _file_guard: None }
    }

    /// Guard holding a non-blocking writer's flush handle.
    pub fn from_worker(guard: WorkerGuard) -> Self {
        Self {
            _file_guard: Some(guard),
        }
    }
}

/// Process-wide logging facility, seen through a capability interface.
///
/// `apply` is intended to be called exactly once per process, from a single
/// thread, before anything logs. `emit` must be safe to call from multiple
/// threads afterwards; serialization around shared writers is the
/// implementation's concern.
pub trait LogBackend: Send + Sync {
    /// Apply a logging configuration, replacing any default state.
    ///
    /// `file_handler` names the handler entry whose `filename` points at the
    /// destination log file.
    fn apply(
        &self,
        section: &LoggingSection,
        file_handler: &str,
    ) -> Result<LoggingGuard, BackendError>;

    /// Emit one record for the named logger at the given level.
    ///
    /// Level filtering has already happened by the time this is called.
    fn emit(&self, name: &str, level: Level, args: Arguments<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_messages() {
        let err = BackendError::MissingFilename("file_handler".to_string());
        assert!(err.to_string().contains("file_handler"));

        let err = BackendError::Apply("already initialized".to_string());
        assert!(err.to_string().contains("already initialized"));
    }

    #[test]
    fn test_empty_guard_can_be_dropped() {
        let guard = LoggingGuard::none();
        drop(guard);
    }
}
