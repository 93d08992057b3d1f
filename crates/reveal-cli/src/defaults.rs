//! Default arguments read from `~/.config/reveal-init`
//!
//! The file holds plain command-line words, for example
//! `--dir /home/me/src/reveal.js`. They are inserted ahead of the real
//! arguments, so anything given on the command line wins.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Location of the defaults file, if a home directory is known.
pub fn defaults_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("reveal-init"))
}

/// Read default arguments from `path`. A missing file yields none.
pub fn load(path: &Path) -> Result<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(split_words(&content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(CliError::Defaults {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Split file content into argument words.
pub fn split_words(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Insert `defaults` right after the program name in `args`.
pub fn merge<I>(args: I, defaults: Vec<String>) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut merged: Vec<OsString> = args.next().into_iter().collect();
    merged.extend(defaults.into_iter().map(OsString::from));
    merged.extend(args);
    merged
}
