//! Subprocess execution for the `git` executable

use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Captured result of an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Stdout followed by stderr.
    pub combined: Vec<u8>,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Build an output from an exit code and text, mainly for fakes.
    pub fn new(code: i32, combined: impl Into<Vec<u8>>) -> Self {
        Self {
            combined: combined.into(),
            code: Some(code),
        }
    }

    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Combined output as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.combined).into_owned()
    }

    /// Human-readable exit status.
    pub fn status(&self) -> ExitDescription {
        ExitDescription(self.code)
    }
}

/// Display adapter for an exit code.
#[derive(Debug, Clone, Copy)]
pub struct ExitDescription(Option<i32>);

impl fmt::Display for ExitDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Handle on the `git` executable.
///
/// Implements both [`Cloner`](crate::Cloner) and
/// [`FileLister`](crate::FileLister).
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Use `git` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run git with `args`, optionally inside `dir`, capturing all output.
    pub fn run(&self, dir: Option<&Path>, args: &[&str]) -> Result<CommandOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(program = %self.program, ?args, "Running git");

        let output = cmd.output().map_err(|e| Error::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        Ok(CommandOutput {
            combined,
            code: output.status.code(),
        })
    }
}
