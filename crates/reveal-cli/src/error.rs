//! Error types for reveal-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from reveal-core
    #[error(transparent)]
    Core(#[from] reveal_core::Error),

    /// Defaults file exists but could not be read
    #[error("Reading defaults file {path} failed: {source}")]
    Defaults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Logging could not be initialised
    #[error("Failed to set up logging: {message}")]
    Logging { message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
