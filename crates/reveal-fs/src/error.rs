//! Error types for reveal-fs

use std::path::PathBuf;

/// Result type for reveal-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while copying files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot stat source {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Non-regular source file {path} ({kind})")]
    InvalidSourceKind { path: PathBuf, kind: String },

    #[error("Non-regular destination file {path} ({kind})")]
    InvalidDestinationKind { path: PathBuf, kind: String },

    #[error("Cannot stat destination {path}: {source}")]
    DestinationStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Creating directory {path} failed: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open source {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create destination {path}: {source}")]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Copying {from} to {to} failed: {source}")]
    CopyStream {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Relative path {path:?} escapes its root")]
    UnsafeRelativePath { path: String },
}
