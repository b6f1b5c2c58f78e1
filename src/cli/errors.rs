//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero exit code.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Server failed to start or crashed
    #[error("server error: {0}")]
    Server(String),
}
