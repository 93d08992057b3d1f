//! [`TemplateRepo`] builder for pipeline scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::git;

/// A trimmed-down reveal.js checkout: what users need plus the files the
/// default exclusion rules strip.
pub const REVEAL_LAYOUT: &[(&str, &str)] = &[
    (".gitignore", "node_modules\n"),
    (".travis.yml", "language: node_js\n"),
    ("CONTRIBUTING.md", "# Contributing\n"),
    ("Gruntfile.js", "module.exports = function() {};\n"),
    ("LICENSE", "MIT\n"),
    ("README.md", "# reveal.js\n"),
    ("bower.json", "{}\n"),
    ("css/reveal.css", ".reveal {}\n"),
    ("css/theme/black.css", "body { background: #111; }\n"),
    ("css/theme/source/black.scss", "$background: #111;\n"),
    ("css/theme/template/mixins.scss", "@mixin x {}\n"),
    ("demo.html", "<html>demo</html>\n"),
    ("index.html", "<html><div class=\"reveal\"></div></html>\n"),
    ("js/reveal.js", "var Reveal = {};\n"),
    ("package.json", "{ \"name\": \"reveal.js\" }\n"),
    ("plugin/notes/notes.js", "var RevealNotes = {};\n"),
    ("test/test.html", "<html>qunit</html>\n"),
    ("test/test.js", "QUnit.test();\n"),
];

/// Files from [`REVEAL_LAYOUT`] that survive the default rules.
pub const REVEAL_KEPT: &[&str] = &[
    "LICENSE",
    "css/reveal.css",
    "css/theme/black.css",
    "index.html",
    "js/reveal.js",
    "plugin/notes/notes.js",
];

/// A temporary directory holding a committed template repository.
pub struct TemplateRepo {
    temp_dir: TempDir,
}

impl Default for TemplateRepo {
    fn default() -> Self {
        Self::reveal()
    }
}

impl TemplateRepo {
    /// A repository with [`REVEAL_LAYOUT`] committed.
    pub fn reveal() -> Self {
        Self::with_files(REVEAL_LAYOUT)
    }

    /// A repository with exactly `files` committed.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        git::repo_with_files(temp_dir.path(), files);
        Self { temp_dir }
    }

    /// Root of the working tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file in the working tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write an untracked file into the working tree.
    pub fn write_untracked(&self, relative: &str, content: &str) {
        git::write_files(self.root(), &[(relative, content)]);
    }

    /// `file://` URL suitable for `git clone`.
    pub fn url(&self) -> String {
        format!("file://{}", self.root().display())
    }
}

/// Collect every regular file under `root` as sorted `/`-separated paths.
///
/// # Panics
/// Panics if the directory cannot be read.
pub fn list_tree(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap();
                let parts: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
