//! The resolve → list → filter → copy pipeline

use std::path::Path;

use reveal_fs::{CopyOutcome, copy_file, create_dir_all, exists, join_relative};
use reveal_git::FileLister;

use crate::{BootstrapReport, Error, Result, SourceResolver, TargetFilter};

/// Copies a filtered template tree into a destination directory.
///
/// Files are copied one at a time in listing order. The first failure
/// aborts the run; files copied before it stay on disk.
pub struct Bootstrap<'a> {
    resolver: SourceResolver<'a>,
    lister: &'a dyn FileLister,
    filter: TargetFilter,
}

impl<'a> Bootstrap<'a> {
    pub fn new(
        resolver: SourceResolver<'a>,
        lister: &'a dyn FileLister,
        filter: TargetFilter,
    ) -> Self {
        Self {
            resolver,
            lister,
            filter,
        }
    }

    /// Run the pipeline.
    ///
    /// `source` is an existing template checkout; when `None` the resolver
    /// clones one into a temporary directory that is removed before this
    /// returns, whatever the outcome.
    pub fn run(&self, source: Option<&Path>, destination: &Path) -> Result<BootstrapReport> {
        if !exists(destination) {
            tracing::debug!(path = %destination.display(), "Creating target directory");
            create_dir_all(destination).map_err(|e| Error::DestinationRoot {
                path: destination.to_path_buf(),
                source: e,
            })?;
        }

        let mut guard = self.resolver.resolve(source)?;
        let report = self.copy_tree(guard.path(), destination)?;
        guard.release()?;

        tracing::info!(%report, "Template copied");
        Ok(report)
    }

    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<BootstrapReport> {
        let candidates = self.lister.list_tracked(source)?;
        let listed = candidates.len();
        let targets = self.filter.filter(candidates);

        let mut report = BootstrapReport {
            listed,
            excluded: listed - targets.len(),
            ..Default::default()
        };

        for relative in &targets {
            let outcome =
                copy_relative(source, destination, relative).map_err(|e| Error::Copy {
                    relative: relative.clone(),
                    source: e,
                })?;
            tracing::debug!(file = %relative, ?outcome, "Copied");
            report.record(outcome);
        }

        Ok(report)
    }
}

fn copy_relative(
    source: &Path,
    destination: &Path,
    relative: &str,
) -> reveal_fs::Result<CopyOutcome> {
    let from = join_relative(source, relative)?;
    let to = join_relative(destination, relative)?;
    copy_file(from, to)
}
