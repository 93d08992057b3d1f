//! The bootstrap command

use std::path::PathBuf;

use reveal_core::{Bootstrap, BootstrapReport, ExclusionRules, SourceResolver, TargetFilter};
use reveal_git::{FileLister, GitCli, IndexLister};

use crate::cli::{Cli, ListerKind};
use crate::error::{CliError, Result};

/// Resolved inputs of one bootstrap run.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub destination: PathBuf,
    pub source: Option<PathBuf>,
    pub remote: String,
    pub rules: Option<PathBuf>,
    pub lister: ListerKind,
}

impl InitOptions {
    /// Validate parsed arguments.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let destination = cli
            .destination
            .ok_or_else(|| CliError::user("Please specify target directory as an argument"))?;
        Ok(Self {
            destination,
            source: cli.dir,
            remote: cli.remote,
            rules: cli.rules,
            lister: cli.lister,
        })
    }
}

/// Run the bootstrap command.
pub fn run_init(options: &InitOptions) -> Result<BootstrapReport> {
    let rules = match &options.rules {
        Some(path) => ExclusionRules::load(path)?,
        None => ExclusionRules::reveal_defaults(),
    };

    let git = GitCli::new();
    let lister: &dyn FileLister = match options.lister {
        ListerKind::Git => &git,
        ListerKind::Index => &IndexLister,
    };
    let resolver = SourceResolver::new(&git).with_remote(options.remote.clone());

    let report = Bootstrap::new(resolver, lister, TargetFilter::new(rules))
        .run(options.source.as_deref(), &options.destination)?;

    Ok(report)
}
