//! Git collaborators for reveal-init
//!
//! The copy pipeline never talks to git directly; it goes through the
//! [`Cloner`] and [`FileLister`] seams defined here.

pub mod clone;
pub mod command;
pub mod error;
pub mod list;

pub use clone::{Cloner, REVEAL_JS_URL, clone_checked};
pub use command::{CommandOutput, GitCli};
pub use error::{Error, Result};
pub use list::{FileLister, IndexLister, split_listing};
