//! Build tool port
//!
//! The build tool is reached through a wrapper script checked into the
//! repository root.

use std::path::{Path, PathBuf};

/// Outcome of looking for the wrapper at a repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperLookup {
    /// Wrapper exists at this path
    Found(PathBuf),
    /// Wrapper is missing; this is where it was expected
    Missing(PathBuf),
}

/// One invocation of the formatting goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    /// Repository root, used as the working directory
    pub root: PathBuf,
    /// Wrapper executable to run
    pub wrapper: PathBuf,
    /// Comma-joined paths or patterns
    pub files_arg: String,
}

/// Build tool abstraction
#[cfg_attr(test, mockall::automock)]
pub trait BuildTool: Send + Sync {
    /// Look for the wrapper executable under `root`
    fn locate_wrapper(&self, root: &Path) -> WrapperLookup;

    /// Run the formatting goal to completion and return its exit code
    fn apply(&self, request: &ApplyRequest) -> anyhow::Result<i32>;
}
