//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`check`] - Validate a configuration and show the resolved log path
//! - [`demo`] - Bootstrap logging and emit sample records

pub mod check;
pub mod demo;
