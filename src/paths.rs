//! Centralized path definitions for spotless-staged
//!
//! Everything lives under the repository root or the git hooks directory:
//!
//! ```text
//! repo/
//! ├── .spotless-staged.toml      # Optional configuration
//! ├── mvnw                       # Maven wrapper (mvnw.cmd on Windows)
//! └── .git/hooks/pre-commit      # Installed by `spotless-staged install-hook`
//! ```

use std::path::{Path, PathBuf};

/// Configuration filename at the repository root
pub const CONFIG_FILE: &str = ".spotless-staged.toml";

/// Wrapper script name on non-Windows hosts
pub const UNIX_WRAPPER: &str = "mvnw";

/// Wrapper script name on Windows
pub const WINDOWS_WRAPPER: &str = "mvnw.cmd";

/// Hook file written by `install-hook`
const PRE_COMMIT_HOOK: &str = "pre-commit";

/// Get path to `.spotless-staged.toml` under `root`.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Get path to the `pre-commit` hook inside `hooks_dir`.
#[must_use]
pub fn pre_commit_hook(hooks_dir: &Path) -> PathBuf {
    hooks_dir.join(PRE_COMMIT_HOOK)
}
