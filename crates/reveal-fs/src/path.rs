//! Mapping of forward-slash relative paths onto native roots

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Join a `/`-separated relative path onto `root`.
///
/// Relative paths come from version-control listings, which always use
/// forward slashes. Absolute paths, drive prefixes and `..` components are
/// rejected so that the result always stays under `root`.
pub fn join_relative(root: &Path, relative: &str) -> Result<PathBuf> {
    let unsafe_path = || Error::UnsafeRelativePath {
        path: relative.to_string(),
    };

    if relative.is_empty() || relative.starts_with('/') || relative.starts_with('\\') {
        return Err(unsafe_path());
    }

    let mut joined = root.to_path_buf();
    for segment in relative.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => joined.push(part),
            (Some(Component::CurDir), None) => {}
            _ => return Err(unsafe_path()),
        }
    }

    Ok(joined)
}
