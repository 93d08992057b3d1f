//! Exclusion rules deciding which template files are not copied
//!
//! Rules are plain data so they can be built in code, taken from
//! [`ExclusionRules::reveal_defaults`], or loaded from a TOML file:
//!
//! ```toml
//! prefixes = ["test/", "css/theme/source/"]
//! files = ["README.md", "package.json"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Ordered prefix rules plus a set of exact relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionRules {
    /// A path is excluded when it starts with any of these.
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// A path is excluded when it equals any of these.
    #[serde(default)]
    pub files: BTreeSet<String>,
}

impl ExclusionRules {
    /// Rules that exclude nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule set used for reveal.js checkouts: tests, theme sources and
    /// the project's own build and contribution metadata.
    pub fn reveal_defaults() -> Self {
        Self::new()
            .with_prefix("test/")
            .with_prefix("css/theme/source/")
            .with_prefix("css/theme/template/")
            .with_file(".gitignore")
            .with_file(".travis.yml")
            .with_file("CONTRIBUTING.md")
            .with_file("Gruntfile.js")
            .with_file("README.md")
            .with_file("bower.json")
            .with_file("demo.html")
            .with_file("package.json")
    }

    /// Add a prefix rule, keeping insertion order and skipping duplicates.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
        self
    }

    /// Add an exact-path rule.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.files.insert(file.into());
        self
    }

    /// Whether `path` is excluded. The empty path is always excluded.
    pub fn is_excluded(&self, path: &str) -> bool {
        path.is_empty()
            || self.files.contains(path)
            || self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Parse rules from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::RulesRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content).map_err(|e| Error::RulesParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
