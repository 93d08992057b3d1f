//! Acquisition of the template source directory
//!
//! The source is either a directory the caller already has (borrowed) or a
//! fresh shallow clone in a temporary directory (owned). Either way it is
//! handed out as a [`SourceGuard`], which removes an owned checkout when it
//! is released or dropped.

use std::path::{Path, PathBuf};

use reveal_git::{Cloner, REVEAL_JS_URL, clone_checked};
use tempfile::TempDir;

use crate::{Error, Result};

const TEMP_PREFIX: &str = "reveal-init-";

/// Scoped handle on a resolved source directory.
#[derive(Debug)]
pub struct SourceGuard {
    path: PathBuf,
    owned: Option<TempDir>,
}

impl SourceGuard {
    /// Wrap a caller-supplied directory. Releasing it does nothing.
    pub fn borrowed(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            owned: None,
        }
    }

    fn owned(dir: TempDir) -> Self {
        Self {
            path: dir.path().to_path_buf(),
            owned: Some(dir),
        }
    }

    /// The directory containing the template files.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory is removed on release.
    pub fn is_owned(&self) -> bool {
        self.owned.is_some()
    }

    /// Remove an owned directory now, reporting failures.
    ///
    /// Calling it again, or on a borrowed directory, is a no-op.
    pub fn release(&mut self) -> Result<()> {
        let Some(dir) = self.owned.take() else {
            return Ok(());
        };
        tracing::debug!(path = %self.path.display(), "Removing temporary checkout");
        dir.close().map_err(|e| Error::Cleanup {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Drop for SourceGuard {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "Failed to remove temporary checkout");
        }
    }
}

/// Produces the source directory for one bootstrap run.
pub struct SourceResolver<'a> {
    cloner: &'a dyn Cloner,
    remote: String,
    temp_root: Option<PathBuf>,
}

impl<'a> SourceResolver<'a> {
    /// Resolver cloning [`REVEAL_JS_URL`] with `cloner`.
    pub fn new(cloner: &'a dyn Cloner) -> Self {
        Self {
            cloner,
            remote: REVEAL_JS_URL.to_string(),
            temp_root: None,
        }
    }

    /// Clone from `remote` instead of the default upstream.
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Create temporary checkouts under `dir` instead of the system default.
    pub fn with_temp_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(dir.into());
        self
    }

    /// Resolve the source directory.
    ///
    /// A non-empty `explicit` directory is returned as-is. Otherwise the
    /// remote is cloned into a new temporary directory; if the clone fails
    /// that directory is removed before the error is returned.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<SourceGuard> {
        if let Some(dir) = explicit.filter(|d| !d.as_os_str().is_empty()) {
            tracing::info!(source = %dir.display(), "Using existing template directory");
            return Ok(SourceGuard::borrowed(dir));
        }

        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);
        let dir = match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| Error::TempDir { source: e })?;

        let guard = SourceGuard::owned(dir);
        clone_checked(self.cloner, &self.remote, guard.path())?;
        Ok(guard)
    }
}
