//! No-operation backend implementation.

use std::fmt::Arguments;

use super::{BackendError, LogBackend, LoggingGuard};
use crate::config::LoggingSection;
use crate::level::Level;

/// A backend that accepts any configuration and discards all records.
///
/// Useful for unit tests (the tracing global subscriber can only be
/// installed once per process), benchmarks, and silent operation modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl LogBackend for NoOpBackend {
    fn apply(
        &self,
        _section: &LoggingSection,
        _file_handler: &str,
    ) -> Result<LoggingGuard, BackendError> {
        Ok(LoggingGuard::none())
    }

    fn emit(&self, _name: &str, _level: Level, _args: Arguments<'_>) {
        // Intentionally empty
    }
}
