//! Logging context and logger handles.
//!
//! [`LoggingContext`] is constructed once by the bootstrap and passed by
//! handle to components that need to log, replacing ambient global logger
//! lookup. It owns the resolved per-logger configuration (explicit levels
//! and propagation flags keyed by dotted name) and the backend the records
//! are forwarded to.
//!
//! [`LoggerHandle`] is a cheap clone over the shared context. Creating a
//! handle performs no I/O and no registration; a name nobody configured is
//! not an error, it simply inherits the global floor and emits through the
//! same backend.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Arguments;
use std::sync::Arc;

use crate::backend::LogBackend;
use crate::config::LoggingSection;
use crate::level::{Level, ParseLevelError};

/// Separator joining parent and child logger names.
pub const NAME_SEPARATOR: char = '.';

/// Level floor used when the configuration declares no root level.
pub const DEFAULT_FLOOR: Level = Level::Warning;

struct ContextInner {
    backend: Arc<dyn LogBackend>,
    floor: Level,
    levels: BTreeMap<String, Level>,
    propagate: BTreeMap<String, bool>,
    own_handlers: BTreeSet<String>,
    root_has_handlers: bool,
}

/// Shared logging state for one configured process.
#[derive(Clone)]
pub struct LoggingContext {
    inner: Arc<ContextInner>,
}

impl std::fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingContext")
            .field("floor", &self.inner.floor)
            .field("levels", &self.inner.levels)
            .field("propagate", &self.inner.propagate)
            .field("own_handlers", &self.inner.own_handlers)
            .field("root_has_handlers", &self.inner.root_has_handlers)
            .finish_non_exhaustive()
    }
}

impl LoggingContext {
    /// Build a context from an applied configuration section.
    ///
    /// Level names in the section (`logging.level` and each entry of
    /// `logging.loggers`) are validated here; an unknown name is an error.
    pub fn from_section(
        backend: Arc<dyn LogBackend>,
        section: &LoggingSection,
    ) -> Result<Self, ParseLevelError> {
        let floor = match section.level.as_deref() {
            Some(name) => name.parse()?,
            None => DEFAULT_FLOOR,
        };

        let mut levels = BTreeMap::new();
        let mut propagate = BTreeMap::new();
        let mut own_handlers = BTreeSet::new();
        for (name, settings) in &section.loggers {
            if let Some(level_name) = settings.level.as_deref() {
                levels.insert(name.clone(), level_name.parse()?);
            }
            if let Some(flag) = settings.propagate {
                propagate.insert(name.clone(), flag);
            }
            if !settings.handlers.is_empty() {
                own_handlers.insert(name.clone());
            }
        }

        Ok(Self {
            inner: Arc::new(ContextInner {
                backend,
                floor,
                levels,
                propagate,
                own_handlers,
                root_has_handlers: !section.handlers.is_empty(),
            }),
        })
    }

    /// Handle for the root logger (the empty name).
    pub fn root(&self) -> LoggerHandle {
        LoggerHandle {
            name: String::new(),
            inner: Arc::clone(&self.inner),
        }
    }

    /// Handle for a dotted logger name.
    ///
    /// Repeated calls with the same name return handles observing the same
    /// configured state.
    pub fn logger(&self, name: &str) -> LoggerHandle {
        LoggerHandle {
            name: name.to_string(),
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Handle for one named logger.
///
/// Filters records against the logger's effective level, then forwards to
/// the context's backend. Cloning is cheap; handles are plain names over
/// shared state.
#[derive(Clone)]
pub struct LoggerHandle {
    name: String,
    inner: Arc<ContextInner>,
}

impl LoggerHandle {
    /// The qualified dotted name. Empty for the root logger.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle for a child of this logger.
    ///
    /// The child's qualified name is this name joined with `suffix` by
    /// [`NAME_SEPARATOR`]; a child of root is just `suffix`.
    pub fn child(&self, suffix: &str) -> LoggerHandle {
        let name = if self.name.is_empty() {
            suffix.to_string()
        } else {
            format!("{}{}{}", self.name, NAME_SEPARATOR, suffix)
        };
        LoggerHandle {
            name,
            inner: Arc::clone(&self.inner),
        }
    }

    /// The minimum severity this logger emits, resolved by walking up the
    /// dotted-name chain to the nearest explicit level, falling back to the
    /// context's global floor.
    pub fn effective_level(&self) -> Level {
        effective_level(&self.inner.levels, self.inner.floor, &self.name)
    }

    /// Whether records also reach the parent's handlers. Defaults to true
    /// when the configuration says nothing for this name.
    pub fn propagates(&self) -> bool {
        self.inner.propagate.get(&self.name).copied().unwrap_or(true)
    }

    /// Whether any handler would receive a record from this logger: its own
    /// handlers, then each ancestor's (the root's handlers being the
    /// configuration's top-level entries), stopping at the first logger in
    /// the chain with propagation disabled.
    pub fn has_handlers(&self) -> bool {
        has_handler(
            &self.inner.own_handlers,
            &self.inner.propagate,
            self.inner.root_has_handlers,
            &self.name,
        )
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.effective_level()
    }

    /// Emit one record if `level` is at or above the effective level and a
    /// handler would receive it.
    ///
    /// Never fails; a record below the effective level, or one cut off from
    /// every handler by disabled propagation, is silently dropped.
    pub fn log(&self, level: Level, args: Arguments<'_>) {
        if self.enabled(level) && self.has_handlers() {
            self.inner.backend.emit(&self.name, level, args);
        }
    }

    /// Log a debug-level message.
    pub fn debug(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Log an info-level message.
    pub fn info(&self, args: Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Log a warning-level message.
    pub fn warning(&self, args: Arguments<'_>) {
        self.log(Level::Warning, args);
    }

    /// Log an error-level message.
    pub fn error(&self, args: Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

/// Resolve the effective level for a dotted name.
///
/// Pure function over the explicit-level map: checks the name itself, then
/// each ancestor obtained by dropping the last dotted segment, and finally
/// falls back to `floor`.
fn effective_level(levels: &BTreeMap<String, Level>, floor: Level, name: &str) -> Level {
    let mut current = name;
    while !current.is_empty() {
        if let Some(level) = levels.get(current) {
            return *level;
        }
        current = match current.rfind(NAME_SEPARATOR) {
            Some(idx) => &current[..idx],
            None => "",
        };
    }
    floor
}

/// Resolve whether any handler receives a record emitted at `name`.
///
/// Pure function over the routing maps: walks the dotted-name chain from the
/// emitting logger upward. A logger with its own handlers is a sink; a
/// logger with propagation disabled ends the walk; reaching the root falls
/// back to whether the configuration declared any top-level handlers.
fn has_handler(
    own_handlers: &BTreeSet<String>,
    propagate: &BTreeMap<String, bool>,
    root_has_handlers: bool,
    name: &str,
) -> bool {
    let mut current = name;
    while !current.is_empty() {
        if own_handlers.contains(current) {
            return true;
        }
        if !propagate.get(current).copied().unwrap_or(true) {
            return false;
        }
        current = match current.rfind(NAME_SEPARATOR) {
            Some(idx) => &current[..idx],
            None => "",
        };
    }
    root_has_handlers
}

/// Log a debug-level message through a [`LoggerHandle`].
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// Log an info-level message through a [`LoggerHandle`].
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// Log a warning-level message through a [`LoggerHandle`].
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(format_args!($($arg)*))
    };
}

/// Log an error-level message through a [`LoggerHandle`].
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, LoggingGuard};
    use crate::config::{HandlerSettings, LoggerSettings, LoggingSection};
    use std::sync::Mutex;

    /// Test backend that records every emitted record.
    #[derive(Default)]
    struct RecordingBackend {
        records: Mutex<Vec<(String, Level, String)>>,
    }

    impl RecordingBackend {
        fn records(&self) -> Vec<(String, Level, String)> {
            self.records.lock().unwrap().clone()
        }
    }

    impl LogBackend for RecordingBackend {
        fn apply(
            &self,
            _section: &LoggingSection,
            _file_handler: &str,
        ) -> Result<LoggingGuard, BackendError> {
            Ok(LoggingGuard::none())
        }

        fn emit(&self, name: &str, level: Level, args: Arguments<'_>) {
            self.records
                .lock()
                .unwrap()
                .push((name.to_string(), level, args.to_string()));
        }
    }

    fn section_with(
        level: Option<&str>,
        loggers: &[(&str, Option<&str>, Option<bool>)],
    ) -> LoggingSection {
        let mut section = LoggingSection {
            level: level.map(str::to_string),
            ..Default::default()
        };
        // Root file handler, so records reach the backend by default.
        section
            .handlers
            .insert("file_handler".to_string(), HandlerSettings::default());
        for (name, logger_level, propagate) in loggers {
            section.loggers.insert(
                name.to_string(),
                LoggerSettings {
                    level: logger_level.map(str::to_string),
                    propagate: *propagate,
                    ..Default::default()
                },
            );
        }
        section
    }

    fn context(
        backend: Arc<RecordingBackend>,
        section: &LoggingSection,
    ) -> LoggingContext {
        LoggingContext::from_section(backend, section).unwrap()
    }

    #[test]
    fn test_root_child_qualified_name() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(backend, &section_with(Some("INFO"), &[]));

        let child = ctx.root().child("child");
        assert_eq!(child.name(), "child");

        let grandchild = child.child("grand");
        assert_eq!(grandchild.name(), "child.grand");
    }

    #[test]
    fn test_child_inherits_root_level() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(backend, &section_with(Some("INFO"), &[]));

        let child = ctx.root().child("child");
        assert_eq!(ctx.root().effective_level(), Level::Info);
        assert_eq!(child.effective_level(), Level::Info);
    }

    #[test]
    fn test_explicit_level_overrides_for_subtree() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(
            backend,
            &section_with(Some("WARNING"), &[("db", Some("DEBUG"), None)]),
        );

        assert_eq!(ctx.logger("db").effective_level(), Level::Debug);
        assert_eq!(ctx.logger("db.pool").effective_level(), Level::Debug);
        assert_eq!(ctx.logger("net").effective_level(), Level::Warning);
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(
            backend,
            &section_with(
                Some("ERROR"),
                &[("a", Some("DEBUG"), None), ("a.b", Some("WARNING"), None)],
            ),
        );

        assert_eq!(ctx.logger("a.b.c").effective_level(), Level::Warning);
        assert_eq!(ctx.logger("a.other").effective_level(), Level::Debug);
    }

    #[test]
    fn test_records_below_effective_level_dropped() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(Arc::clone(&backend), &section_with(Some("WARNING"), &[]));

        let root = ctx.root();
        root.info(format_args!("dropped"));
        root.warning(format_args!("kept"));
        root.error(format_args!("also kept"));

        let records = backend.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], (String::new(), Level::Warning, "kept".to_string()));
        assert_eq!(records[1], (String::new(), Level::Error, "also kept".to_string()));
    }

    #[test]
    fn test_unconfigured_logger_uses_floor_without_error() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(Arc::clone(&backend), &section_with(None, &[]));

        let handle = ctx.logger("nobody.configured.this");
        assert_eq!(handle.effective_level(), DEFAULT_FLOOR);

        handle.info(format_args!("dropped by floor"));
        handle.error(format_args!("emitted"));
        assert_eq!(backend.records().len(), 1);
    }

    #[test]
    fn test_repeated_lookups_observe_same_state() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(backend, &section_with(Some("DEBUG"), &[]));

        let first = ctx.logger("worker");
        let second = ctx.logger("worker");
        assert_eq!(first.name(), second.name());
        assert_eq!(first.effective_level(), second.effective_level());
    }

    #[test]
    fn test_propagate_flag_resolution() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(
            backend,
            &section_with(Some("INFO"), &[("quiet", None, Some(false))]),
        );

        assert!(!ctx.logger("quiet").propagates());
        assert!(ctx.logger("loud").propagates());
        assert!(ctx.root().propagates());
    }

    #[test]
    fn test_propagate_false_without_own_handlers_drops_records() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(
            Arc::clone(&backend),
            &section_with(Some("DEBUG"), &[("quiet", None, Some(false))]),
        );

        let quiet = ctx.logger("quiet");
        assert!(!quiet.has_handlers());
        quiet.error(format_args!("cut off from every handler"));

        let loud = ctx.logger("loud");
        assert!(loud.has_handlers());
        loud.error(format_args!("reaches the root handler"));

        let records = backend.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "loud");
    }

    #[test]
    fn test_propagate_false_with_own_handlers_still_emits() {
        let backend = Arc::new(RecordingBackend::default());
        let mut section = section_with(Some("DEBUG"), &[]);
        section.loggers.insert(
            "audit".to_string(),
            LoggerSettings {
                propagate: Some(false),
                handlers: vec!["audit_file".to_string()],
                ..Default::default()
            },
        );
        let ctx = context(Arc::clone(&backend), &section);

        let audit = ctx.logger("audit");
        assert!(audit.has_handlers());
        audit.info(format_args!("audit record"));
        assert_eq!(backend.records().len(), 1);
    }

    #[test]
    fn test_descendants_of_non_propagating_logger_are_cut_off() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(
            Arc::clone(&backend),
            &section_with(Some("DEBUG"), &[("quiet", None, Some(false))]),
        );

        // The walk from the child passes through "quiet", which has no
        // handlers of its own and stops propagation toward the root.
        let child = ctx.logger("quiet.sub");
        assert!(!child.has_handlers());
        child.error(format_args!("never emitted"));
        assert!(backend.records().is_empty());
    }

    #[test]
    fn test_no_handlers_configured_drops_all_records() {
        let backend = Arc::new(RecordingBackend::default());
        let section = LoggingSection {
            level: Some("DEBUG".to_string()),
            ..Default::default()
        };
        let ctx = context(Arc::clone(&backend), &section);

        let root = ctx.root();
        assert!(!root.has_handlers());
        root.error(format_args!("nowhere to go"));
        assert!(backend.records().is_empty());
    }

    #[test]
    fn test_invalid_level_name_rejected() {
        let backend: Arc<dyn LogBackend> = Arc::new(RecordingBackend::default());
        let err =
            LoggingContext::from_section(backend, &section_with(Some("NOISY"), &[])).unwrap_err();
        assert_eq!(err, ParseLevelError("NOISY".to_string()));
    }

    #[test]
    fn test_logging_macros() {
        let backend = Arc::new(RecordingBackend::default());
        let ctx = context(Arc::clone(&backend), &section_with(Some("DEBUG"), &[]));

        let logger = ctx.logger("macro");
        log_debug!(logger, "value = {}", 1);
        log_info!(logger, "value = {}", 2);
        log_warning!(logger, "value = {}", 3);
        log_error!(logger, "value = {}", 4);

        let records = backend.records();
        assert_eq!(records.len(), 4);
        assert_eq!(records[3].2, "value = 4");
    }
}
