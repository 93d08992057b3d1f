//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reveal_git::REVEAL_JS_URL;

/// Bootstrap a reveal.js presentation skeleton into a directory
#[derive(Parser, Debug)]
#[command(name = "reveal-init")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Existing reveal.js directory (skips cloning)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Repository to clone when no directory is given
    #[arg(short, long, value_name = "URL", default_value = REVEAL_JS_URL)]
    pub remote: String,

    /// TOML file with exclusion rules replacing the built-in ones
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// How tracked files are enumerated
    #[arg(long, value_enum, default_value_t = ListerKind::Git)]
    pub lister: ListerKind,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Target directory for the presentation
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,
}

/// Backend used to list the template's tracked files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListerKind {
    /// Run `git ls-files`
    Git,
    /// Read the git index through libgit2
    Index,
}
