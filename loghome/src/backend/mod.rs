//! Logging backend abstraction.
//!
//! The bootstrap configures a process-wide logging facility but does not
//! implement one; it talks to the facility through the [`LogBackend`]
//! capability trait. Two implementations are provided:
//!
//! - [`TracingBackend`]: production adapter over the `tracing` ecosystem.
//!   Applying a configuration installs a global subscriber with a
//!   non-blocking file layer; handler-specific policy beyond that stays in
//!   the configuration it is handed.
//! - [`NoOpBackend`]: applies nothing and discards records. For tests and
//!   benchmarks, where the once-per-process global subscriber would get in
//!   the way.
//!
//! Components never call a backend directly; they go through
//! [`LoggerHandle`](crate::context::LoggerHandle), which filters by
//! effective level before forwarding.

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpBackend;
pub use r#trait::{BackendError, LogBackend, LoggingGuard};
pub use tracing_adapter::TracingBackend;
