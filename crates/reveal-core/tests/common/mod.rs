#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use reveal_git::{CommandOutput, Cloner};
use reveal_test_utils::git;

/// A [`Cloner`] that never touches the network.
///
/// On success it materializes `files` as a committed repository in the
/// target directory, so listing works exactly as on a real clone.
pub struct FakeCloner {
    code: i32,
    output: String,
    files: Vec<(String, String)>,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl FakeCloner {
    pub fn failing(code: i32, output: &str) -> Self {
        Self {
            code,
            output: output.to_string(),
            files: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            code: 0,
            output: String::new(),
            files: files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl Cloner for FakeCloner {
    fn clone_shallow(&self, remote: &str, target: &Path) -> reveal_git::Result<CommandOutput> {
        self.calls
            .borrow_mut()
            .push((remote.to_string(), target.to_path_buf()));
        if self.code == 0 {
            let files: Vec<(&str, &str)> = self
                .files
                .iter()
                .map(|(p, c)| (p.as_str(), c.as_str()))
                .collect();
            git::repo_with_files(target, &files);
        } else {
            // A failed clone can leave partial state behind.
            std::fs::write(target.join("partial"), "half a pack").unwrap();
        }
        Ok(CommandOutput::new(self.code, self.output.as_bytes()))
    }
}

/// Entries directly inside `dir`.
pub fn entries(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect()
}
