//! Git integration adapter
//!
//! Implements `VersionControl` trait using git commands.
//!
//! - [`hooks`] - Git hooks installation

pub mod hooks;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::core::models::WhitespacePolicy;
use crate::core::ports::VersionControl;

pub use hooks::{HookInstall, install_pre_commit};

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Directory git runs hooks from (honours `core.hooksPath` and worktrees)
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is not inside a repository.
    pub fn hooks_dir(&self) -> anyhow::Result<PathBuf> {
        let output = git(&self.workdir, &["rev-parse", "--git-path", "hooks"])?;
        if !output.status.success() {
            anyhow::bail!("Not a git repository");
        }

        let hooks = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        if hooks.is_absolute() {
            Ok(hooks)
        } else {
            Ok(self.workdir.join(hooks))
        }
    }
}

impl VersionControl for GitVersionControl {
    fn repo_root(&self) -> anyhow::Result<PathBuf> {
        let output = git(&self.workdir, &["rev-parse", "--show-toplevel"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{}", stderr.trim());
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(PathBuf::from(root))
    }

    fn has_substantive_changes(
        &self,
        root: &Path,
        file: &str,
        whitespace: WhitespacePolicy,
    ) -> anyhow::Result<bool> {
        let output = git(
            root,
            &["diff", "--cached", "--numstat", whitespace.git_flag(), "--", file],
        )?;

        if !output.status.success() {
            log::warn!(
                "git diff failed for {file}: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(false);
        }

        Ok(numstat_has_changes(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Whether `git diff --numstat` output reports any changed line
///
/// Each line is `added<TAB>removed<TAB>path`. Binary files report `-` for
/// both counts and always count as changed.
#[must_use]
pub fn numstat_has_changes(numstat: &str) -> bool {
    numstat.lines().any(|line| {
        let mut fields = line.split('\t');
        match (fields.next(), fields.next()) {
            (Some(added), Some(removed)) => added.trim() != "0" || removed.trim() != "0",
            _ => false,
        }
    })
}

/// Run git in `dir`
fn git(dir: &Path, args: &[&str]) -> anyhow::Result<Output> {
    log::debug!("git {} (in {})", args.join(" "), dir.display());
    Ok(Command::new("git").args(args).current_dir(dir).output()?)
}
