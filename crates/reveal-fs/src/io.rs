//! File copy primitives with pre-flight validation

use std::fs::{self, File, Metadata};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::{Error, Result};

/// Mode used for every directory created on behalf of the caller.
///
/// The process umask still applies.
pub const DIR_MODE: u32 = 0o777;

/// What a successful [`copy_file`] actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Bytes were streamed into the destination.
    Copied { bytes: u64 },
    /// Source and destination are the same file; nothing was written.
    AlreadySatisfied,
}

/// Check whether `path` currently exists.
///
/// Any stat failure counts as "does not exist", including permission
/// errors. Callers that need to tell the two apart must stat the path
/// themselves.
pub fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Create `path` and all missing ancestors with [`DIR_MODE`].
pub fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path).map_err(|e| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy a regular file from `source` to `destination`.
///
/// The destination's parent chain is created when missing and an existing
/// regular destination is overwritten in full. When both paths name the
/// same underlying file the call succeeds without touching it.
///
/// A failure while streaming may leave a truncated destination behind.
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<CopyOutcome> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let source_meta = fs::metadata(source).map_err(|e| Error::SourceUnavailable {
        path: source.to_path_buf(),
        source: e,
    })?;
    if !source_meta.is_file() {
        return Err(Error::InvalidSourceKind {
            path: source.to_path_buf(),
            kind: describe_kind(&source_meta).to_string(),
        });
    }

    match fs::metadata(destination) {
        Ok(dest_meta) => {
            if !dest_meta.is_file() {
                return Err(Error::InvalidDestinationKind {
                    path: destination.to_path_buf(),
                    kind: describe_kind(&dest_meta).to_string(),
                });
            }
            if is_same_file(source, &source_meta, destination, &dest_meta) {
                tracing::debug!(
                    source = %source.display(),
                    destination = %destination.display(),
                    "Source and destination are the same file, skipping"
                );
                return Ok(CopyOutcome::AlreadySatisfied);
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::DestinationStat {
                path: destination.to_path_buf(),
                source: e,
            });
        }
    }

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
        && !exists(parent)
    {
        tracing::debug!(dir = %parent.display(), "Creating destination directory");
        create_dir_all(parent)?;
    }

    let bytes = copy_contents(source, destination)?;
    Ok(CopyOutcome::Copied { bytes })
}

/// Stream the bytes of `source` into a freshly truncated `destination`.
fn copy_contents(source: &Path, destination: &Path) -> Result<u64> {
    let mut input = File::open(source).map_err(|e| Error::SourceOpen {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut output = File::create(destination).map_err(|e| Error::DestinationCreate {
        path: destination.to_path_buf(),
        source: e,
    })?;

    stream_and_sync(source, destination, &mut input, &mut output, File::sync_all)
}

/// Copy `input` into `output`, then run `sync` on the output.
///
/// A sync failure after a successful copy is still reported.
fn stream_and_sync<R, W>(
    source: &Path,
    destination: &Path,
    input: &mut R,
    output: &mut W,
    sync: impl FnOnce(&W) -> io::Result<()>,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let stream_error = |e: io::Error| Error::CopyStream {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    };

    let bytes = io::copy(input, output).map_err(stream_error)?;
    sync(&*output).map_err(stream_error)?;

    Ok(bytes)
}

#[cfg(unix)]
fn is_same_file(_: &Path, a: &Metadata, _: &Path, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn is_same_file(a_path: &Path, _: &Metadata, b_path: &Path, _: &Metadata) -> bool {
    match (fs::canonicalize(a_path), fs::canonicalize(b_path)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Short human-readable name for the kind of filesystem entry.
fn describe_kind(meta: &Metadata) -> &'static str {
    let file_type = meta.file_type();
    if file_type.is_dir() {
        return "directory";
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if file_type.is_block_device() {
            return "block device";
        }
        if file_type.is_char_device() {
            return "character device";
        }
        if file_type.is_fifo() {
            return "fifo";
        }
        if file_type.is_socket() {
            return "socket";
        }
    }
    if file_type.is_file() {
        "regular file"
    } else {
        "unknown"
    }
}
