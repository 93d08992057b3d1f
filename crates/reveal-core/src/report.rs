//! Summary of one bootstrap run

use std::fmt;

use reveal_fs::CopyOutcome;

/// Counters collected while copying a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Files reported by the listing.
    pub listed: usize,
    /// Files dropped by the exclusion rules.
    pub excluded: usize,
    /// Files whose bytes were written.
    pub copied: usize,
    /// Files skipped because source and destination were the same file.
    pub already_satisfied: usize,
    /// Total bytes written.
    pub bytes: u64,
}

impl BootstrapReport {
    pub(crate) fn record(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied { bytes } => {
                self.copied += 1;
                self.bytes += bytes;
            }
            CopyOutcome::AlreadySatisfied => self.already_satisfied += 1,
        }
    }
}

impl fmt::Display for BootstrapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listed={} excluded={} copied={} unchanged={} bytes={}",
            self.listed, self.excluded, self.copied, self.already_satisfied, self.bytes
        )
    }
}
