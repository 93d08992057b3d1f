//! Shallow clone collaborator

use std::path::Path;

use crate::{CommandOutput, Error, GitCli, Result};

/// Default upstream for the presentation template.
pub const REVEAL_JS_URL: &str = "https://github.com/hakimel/reveal.js.git";

/// Anything able to materialize a remote repository into a directory.
///
/// Implementations report the external tool's outcome; interpreting a
/// non-zero status is left to [`clone_checked`].
pub trait Cloner {
    /// Clone `remote` into `target` fetching only the latest commit.
    fn clone_shallow(&self, remote: &str, target: &Path) -> Result<CommandOutput>;
}

impl Cloner for GitCli {
    fn clone_shallow(&self, remote: &str, target: &Path) -> Result<CommandOutput> {
        let target = target.to_string_lossy();
        self.run(None, &["clone", "--depth", "1", remote, target.as_ref()])
    }
}

impl<C: Cloner + ?Sized> Cloner for &C {
    fn clone_shallow(&self, remote: &str, target: &Path) -> Result<CommandOutput> {
        (**self).clone_shallow(remote, target)
    }
}

impl<C: Cloner + ?Sized> Cloner for Box<C> {
    fn clone_shallow(&self, remote: &str, target: &Path) -> Result<CommandOutput> {
        (**self).clone_shallow(remote, target)
    }
}

/// Clone and turn a non-zero exit into [`Error::Clone`].
pub fn clone_checked(cloner: &dyn Cloner, remote: &str, target: &Path) -> Result<()> {
    tracing::info!(remote, target = %target.display(), "Cloning template");

    let output = cloner.clone_shallow(remote, target)?;
    if !output.success() {
        return Err(Error::Clone {
            remote: remote.to_string(),
            status: output.status().to_string(),
            output: output.text(),
        });
    }
    Ok(())
}
