//! Whitespace differences that do not count as a staged change

use serde::{Deserialize, Serialize};

/// Which whitespace differences git should ignore when checking a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespacePolicy {
    /// Ignore whitespace at end of line, including CR/LF flips
    #[default]
    Eol,
    /// Ignore all whitespace
    All,
}

impl WhitespacePolicy {
    /// The `git diff` flag implementing this policy
    #[must_use]
    pub const fn git_flag(self) -> &'static str {
        match self {
            Self::Eol => "--ignore-space-at-eol",
            Self::All => "--ignore-all-space",
        }
    }
}

impl std::fmt::Display for WhitespacePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eol => write!(f, "eol"),
            Self::All => write!(f, "all"),
        }
    }
}
