//! Enumeration of version-controlled files

use std::path::Path;

use git2::Repository;

use crate::{Error, GitCli, Result};

/// Lists the files tracked by the repository in a directory.
///
/// Paths are relative to the directory, `/`-separated and never empty.
pub trait FileLister {
    fn list_tracked(&self, dir: &Path) -> Result<Vec<String>>;
}

impl FileLister for GitCli {
    fn list_tracked(&self, dir: &Path) -> Result<Vec<String>> {
        let output = self.run(Some(dir), &["ls-files", "-z"])?;
        if !output.success() {
            return Err(Error::Listing {
                dir: dir.to_path_buf(),
                status: output.status().to_string(),
                output: output.text(),
            });
        }
        Ok(split_listing(&output.text()))
    }
}

/// Reads the index directly through libgit2, without spawning git.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexLister;

impl FileLister for IndexLister {
    fn list_tracked(&self, dir: &Path) -> Result<Vec<String>> {
        let repo = Repository::open(dir)?;
        let index = repo.index()?;

        let mut files: Vec<String> = Vec::with_capacity(index.len());
        for entry in index.iter() {
            let path = String::from_utf8_lossy(&entry.path).into_owned();
            // Conflicted entries appear once per stage.
            if path.is_empty() || files.last() == Some(&path) {
                continue;
            }
            files.push(path);
        }

        tracing::debug!(dir = %dir.display(), count = files.len(), "Read index");
        Ok(files)
    }
}

impl<L: FileLister + ?Sized> FileLister for &L {
    fn list_tracked(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list_tracked(dir)
    }
}

impl<L: FileLister + ?Sized> FileLister for Box<L> {
    fn list_tracked(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).list_tracked(dir)
    }
}

/// Split NUL-delimited `ls-files -z` output, dropping empty entries.
///
/// With `-z` git prints names verbatim, so quotes, backslashes and control
/// characters in file names need no unescaping.
pub fn split_listing(output: &str) -> Vec<String> {
    output
        .split('\0')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
