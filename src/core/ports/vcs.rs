//! Version control system port
//!
//! Defines the queries the hook makes against the repository.

use std::path::{Path, PathBuf};

use crate::core::models::WhitespacePolicy;

/// Version control system abstraction
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Get the repository root path
    fn repo_root(&self) -> anyhow::Result<PathBuf>;

    /// Whether `file` has staged changes once ignorable whitespace is discounted
    ///
    /// `file` is relative to `root`.
    fn has_substantive_changes(
        &self,
        root: &Path,
        file: &str,
        whitespace: WhitespacePolicy,
    ) -> anyhow::Result<bool>;
}
