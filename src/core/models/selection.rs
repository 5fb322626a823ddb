//! Candidate files split into qualifying and skipped

use serde::Serialize;

/// Why a candidate file was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing staged once ignorable whitespace is discounted
    WhitespaceOnly,
    /// Did not match any configured include pattern
    NotIncluded,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhitespaceOnly => write!(f, "only EOL/whitespace changes"),
            Self::NotIncluded => write!(f, "not matched by include patterns"),
        }
    }
}

/// A skipped candidate and the reason it was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path as given on the command line
    pub file: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of filtering the candidate list
///
/// `qualifying` keeps the order the candidates were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    /// Files with substantive staged changes
    pub qualifying: Vec<String>,
    /// Files left out, with reasons
    pub skipped: Vec<SkippedFile>,
}

impl FileSelection {
    /// Record a file that will be formatted
    pub fn keep(&mut self, file: &str) {
        self.qualifying.push(file.to_string());
    }

    /// Record a file that will not be formatted
    pub fn skip(&mut self, file: &str, reason: SkipReason) {
        self.skipped.push(SkippedFile {
            file: file.to_string(),
            reason,
        });
    }

    /// True when nothing qualifies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.qualifying.is_empty()
    }
}
