//! Error types for the student records CLI.

use thiserror::Error;

/// Errors that stop the CLI.
///
/// Record store failures are not listed here: the menu reports those to the
/// user and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Configuration could not be resolved from flags, environment or files.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {message}")]
    Terminal {
        /// Description of the I/O error.
        message: String,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal {
            message: err.to_string(),
        }
    }
}
