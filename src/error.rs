//! Error taxonomy for a hook run
//!
//! Every variant is fatal. The binary prints the message and exits with
//! [`HookError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a hook run
#[derive(Debug, Error)]
pub enum HookError {
    /// No candidate files were passed on the command line
    #[error("No files provided.")]
    NoFiles,

    /// The working directory is not inside a git work tree
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    /// The build wrapper is missing from the repository root
    #[error("Maven Wrapper not found! Expected it at {}", .0.display())]
    WrapperMissing(PathBuf),

    /// `.spotless-staged.toml` exists but is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The wrapper could not be started at all
    #[error("Failed to run {}: {message}", .wrapper.display())]
    Spawn {
        /// Wrapper that was being launched
        wrapper: PathBuf,
        /// Underlying failure
        message: String,
    },

    /// The formatting goal ran and reported failure
    #[error("{goal} failed with exit code {code}")]
    ToolFailed {
        /// Goal that was run (e.g. `spotless:apply`)
        goal: String,
        /// Exit code reported by the wrapper
        code: i32,
    },

    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HookError {
    /// Process exit code for this error
    ///
    /// A failing build tool hands its own exit code through; everything else
    /// exits with 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ToolFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
