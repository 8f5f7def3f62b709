//! Demo command: bootstrap logging and emit sample records.
//!
//! Mirrors the canonical usage: initialize once at startup, then obtain the
//! root logger and a child logger and emit records at several levels.

use clap::Args;
use std::path::PathBuf;

use loghome::bootstrap::{Bootstrap, DEFAULT_ENV_VAR, DEFAULT_LOG_FILE};
use loghome::config::{HandlerSettings, LogConfig};
use loghome::{log_debug, log_error, log_info, log_warning};

use crate::error::CliError;

#[derive(Args)]
pub struct DemoArgs {
    /// Path to a JSON logging configuration (built-in default when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Environment variable holding the log root directory
    #[arg(long, default_value = DEFAULT_ENV_VAR)]
    pub env_var: String,

    /// Directory used when the environment variable is unset (defaults to the OS temp dir)
    #[arg(long)]
    pub default_root: Option<PathBuf>,

    /// Log file name appended to the resolved directory
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub file_name: String,
}

/// Built-in configuration used when no `--config` is given: INFO floor,
/// file output plus a console handler so the demo is visible on stdout.
fn default_config() -> LogConfig {
    let mut config = LogConfig::default();
    config.logging.level = Some("INFO".to_string());
    config
        .logging
        .handlers
        .insert("file_handler".to_string(), HandlerSettings::default());
    config
        .logging
        .handlers
        .insert("console_handler".to_string(), HandlerSettings::default());
    config
}

pub fn run(args: DemoArgs) -> Result<(), CliError> {
    let mut bootstrap = match &args.config {
        Some(path) => Bootstrap::new(path),
        None => Bootstrap::from_config(default_config()),
    };
    bootstrap = bootstrap
        .with_env_var(&args.env_var)
        .with_log_file_name(&args.file_name);
    if let Some(root) = &args.default_root {
        bootstrap = bootstrap.with_default_log_root(root);
    }

    let log_path = bootstrap.resolve_log_path();
    let (ctx, guard) = bootstrap.initialize()?;

    // Creating a logger handle is cheap; do it wherever a component needs
    // to log. The root logger is the unnamed default.
    let logger = ctx.root();
    log_info!(logger, "This is an INFO message on the root logger.");
    log_debug!(logger, "This is a DEBUG message on the root logger.");

    // Component-scoped messages go through child loggers.
    let child = logger.child("child");
    log_warning!(child, "This is a WARNING message on the child logger.");
    log_error!(child, "This is an ERROR message on the child logger.");

    // Flush the file writer before reporting where the records went.
    drop(guard);

    println!();
    println!("Log records written to {}", log_path.display());

    Ok(())
}
