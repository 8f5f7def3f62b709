//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use loghome::bootstrap::BootstrapError;
use loghome::config::ConfigError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Configuration lacks the designated file handler entry
    MissingHandler(String),
    /// Bootstrap failed
    Bootstrap(BootstrapError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(ConfigError::Shape(_)) | CliError::MissingHandler(_) => {
                eprintln!();
                eprintln!("The configuration must contain a file handler entry, for example:");
                eprintln!("  {{\"logging\": {{\"handlers\": {{\"file_handler\": {{\"filename\": \"\"}}}}}}}}");
            }
            CliError::Bootstrap(BootstrapError::DirectoryCreate(_)) => {
                eprintln!();
                eprintln!("Check that the log root directory is writable, or point the");
                eprintln!("LOG_HOME environment variable somewhere else.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "{}", err),
            CliError::MissingHandler(name) => {
                write!(f, "configuration has no 'logging.handlers.{}' entry", name)
            }
            CliError::Bootstrap(err) => write!(f, "{}", err),
        }
    }
}

impl From<BootstrapError> for CliError {
    fn from(err: BootstrapError) -> Self {
        CliError::Bootstrap(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_handler_message_names_the_entry() {
        let err = CliError::MissingHandler("file_handler".to_string());
        assert_eq!(
            err.to_string(),
            "configuration has no 'logging.handlers.file_handler' entry"
        );
    }
}
