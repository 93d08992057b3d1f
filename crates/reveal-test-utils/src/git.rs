//! Git repository fixtures.
//!
//! Fixtures shell out to the `git` CLI so that tests see exactly what
//! `git ls-files` and `git clone` will see.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git` with `args` in `path`, panicking on failure.
///
/// # Panics
/// Panics if git cannot be spawned or exits non-zero.
pub fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("git fixture: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "git fixture: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Initialises a real git repository with a local identity configured.
///
/// # Panics
/// Panics if any git operation fails.
pub fn init_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Writes `files` (relative path, content) under `root`, creating parents.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("write_files: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_files: failed to write {}: {e}", path.display()));
    }
}

/// Stages everything and records one commit.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_all(path: &Path, message: &str) {
    git(path, &["add", "--all"]);
    git(path, &["commit", "-m", message]);
}

/// Initialises a repository containing `files` in a single commit.
///
/// # Panics
/// Panics if any git or filesystem operation fails.
pub fn repo_with_files(path: &Path, files: &[(&str, &str)]) {
    init_repo(path);
    write_files(path, files);
    commit_all(path, "Initial commit");
}

/// Initialises a real git repository using `git2` (no commit, no config).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn empty_git2_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "empty_git2_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}
