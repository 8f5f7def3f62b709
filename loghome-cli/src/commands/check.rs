//! Configuration validation command.
//!
//! Loads a configuration, verifies it has the designated file handler, and
//! reports where log output would go - without creating any directory or
//! touching the process-wide logging state.

use clap::Args;
use std::path::PathBuf;

use loghome::bootstrap::{Bootstrap, DEFAULT_ENV_VAR, DEFAULT_FILE_HANDLER, DEFAULT_LOG_FILE};
use loghome::config;

use crate::error::CliError;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the JSON logging configuration
    #[arg(long)]
    pub config: PathBuf,

    /// Environment variable holding the log root directory
    #[arg(long, default_value = DEFAULT_ENV_VAR)]
    pub env_var: String,

    /// Directory used when the environment variable is unset (defaults to the OS temp dir)
    #[arg(long)]
    pub default_root: Option<PathBuf>,

    /// Log file name appended to the resolved directory
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub file_name: String,

    /// Handler entry whose filename would be rewritten
    #[arg(long, default_value = DEFAULT_FILE_HANDLER)]
    pub file_handler: String,
}

pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let loaded = config::load_from(&args.config)?;

    if !loaded.logging.handlers.contains_key(&args.file_handler) {
        return Err(CliError::MissingHandler(args.file_handler));
    }

    let mut bootstrap = Bootstrap::new(&args.config)
        .with_env_var(&args.env_var)
        .with_log_file_name(&args.file_name)
        .with_file_handler(&args.file_handler);
    if let Some(root) = &args.default_root {
        bootstrap = bootstrap.with_default_log_root(root);
    }

    let level = loaded.logging.level.as_deref().unwrap_or("WARNING (default)");
    let handlers: Vec<&str> = loaded.logging.handlers.keys().map(String::as_str).collect();

    println!("Configuration: {}", args.config.display());
    println!("  Root level:    {}", level);
    println!("  Handlers:      {}", handlers.join(", "));
    if !loaded.logging.loggers.is_empty() {
        let loggers: Vec<&str> = loaded.logging.loggers.keys().map(String::as_str).collect();
        println!("  Loggers:       {}", loggers.join(", "));
    }
    println!("  Log directory: {}", bootstrap.resolve_log_dir().display());
    println!("  Log file:      {}", bootstrap.resolve_log_path().display());
    println!();
    println!("OK");

    Ok(())
}
