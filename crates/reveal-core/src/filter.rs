//! Selection of the candidate files that get copied

use crate::ExclusionRules;

/// Applies an [`ExclusionRules`] set to candidate relative paths.
#[derive(Debug, Clone, Default)]
pub struct TargetFilter {
    rules: ExclusionRules,
}

impl TargetFilter {
    pub fn new(rules: ExclusionRules) -> Self {
        Self { rules }
    }

    /// Whether a single candidate is dropped.
    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.rules.is_excluded(candidate)
    }

    /// Keep the candidates that no rule excludes, in their original order.
    pub fn filter<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        candidates
            .into_iter()
            .filter(|c| !self.is_excluded(c.as_ref()))
            .map(Into::into)
            .collect()
    }
}
