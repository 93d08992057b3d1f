//! Error types for reveal-core

use std::path::PathBuf;

/// Result type for reveal-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while bootstrapping a template
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from reveal-fs
    #[error(transparent)]
    Fs(#[from] reveal_fs::Error),

    /// Error from reveal-git (clone or listing)
    #[error(transparent)]
    Git(#[from] reveal_git::Error),

    /// Temporary checkout directory could not be created
    #[error("Fail to create tmp dir: {source}")]
    TempDir {
        #[source]
        source: std::io::Error,
    },

    /// Temporary checkout directory could not be removed
    #[error("Removing temporary checkout {path} failed: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination root could not be created
    #[error("Creating target directory {path} failed")]
    DestinationRoot {
        path: PathBuf,
        #[source]
        source: reveal_fs::Error,
    },

    /// A single file of the template could not be copied
    #[error("Copying {relative} failed")]
    Copy {
        relative: String,
        #[source]
        source: reveal_fs::Error,
    },

    /// Exclusion rules file could not be read
    #[error("Reading rules file {path} failed: {source}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Exclusion rules file is not valid TOML
    #[error("Failed to parse rules file {path}: {message}")]
    RulesParse { path: PathBuf, message: String },
}
