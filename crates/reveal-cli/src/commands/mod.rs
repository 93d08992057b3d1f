//! Command implementations for reveal-cli

pub mod init;

pub use init::{InitOptions, run_init};
