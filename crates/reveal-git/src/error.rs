//! Error types for reveal-git

use std::path::PathBuf;

/// Result type for reveal-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to git
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git clone of {remote} failed ({status}). out: {output}")]
    Clone {
        remote: String,
        status: String,
        output: String,
    },

    #[error("git ls-files in {dir} failed ({status}). out: {output}")]
    Listing {
        dir: PathBuf,
        status: String,
        output: String,
    },
}
