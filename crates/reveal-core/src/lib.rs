//! Template bootstrap pipeline for reveal-init
//!
//! Ties the lower crates together:
//!
//! ```text
//!        reveal-cli
//!            |
//!       reveal-core   (rules, filter, source, pipeline)
//!         /      \
//!  reveal-fs   reveal-git
//! ```
//!
//! A run resolves a source directory ([`SourceResolver`]), lists its tracked
//! files, drops the ones matched by [`ExclusionRules`] ([`TargetFilter`]) and
//! copies the rest into the destination ([`Bootstrap`]).

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod source;

pub use error::{Error, Result};
pub use filter::TargetFilter;
pub use pipeline::Bootstrap;
pub use report::BootstrapReport;
pub use rules::ExclusionRules;
pub use source::{SourceGuard, SourceResolver};
