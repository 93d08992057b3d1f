//! Filesystem primitives for reveal-init
//!
//! Provides the existence check, the validated single-file copy and the
//! helpers used to mirror relative paths into a destination tree.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{CopyOutcome, copy_file, create_dir_all, exists};
pub use path::join_relative;
