//! How qualifying files are handed to the formatter
//!
//! Spotless accepts a comma-separated list in `-DspotlessFiles`. Each entry is
//! either an absolute path or a regular expression matched against the
//! absolute path of every source file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Regex character class matching either path separator
pub const SEPARATOR_CLASS: &str = r"[\\/]";

/// Representation of each qualifying file in the formatter argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassMode {
    /// Absolute file paths under the repository root
    #[default]
    Paths,
    /// Regex patterns that match the file with either slash style
    Patterns,
}

impl PassMode {
    /// Render a single file (relative to `root`) as a formatter entry
    #[must_use]
    pub fn render(self, root: &Path, file: &str) -> String {
        match self {
            Self::Paths => root.join(file).to_string_lossy().into_owned(),
            Self::Patterns => match_pattern(file),
        }
    }

    /// Render every file and join them into the single formatter argument
    #[must_use]
    pub fn join(self, root: &Path, files: &[String]) -> String {
        files.iter().map(|f| self.render(root, f)).collect::<Vec<_>>().join(",")
    }
}

impl std::fmt::Display for PassMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paths => write!(f, "paths"),
            Self::Patterns => write!(f, "patterns"),
        }
    }
}

impl std::str::FromStr for PassMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paths" | "path" => Ok(Self::Paths),
            "patterns" | "pattern" => Ok(Self::Patterns),
            _ => Err(format!("Invalid mode: {s}. Use: paths, patterns")),
        }
    }
}

/// Turn a repository-relative path into a separator-agnostic regex
///
/// Both `/` and `\` split the input. Every segment is regex-escaped and the
/// segments are joined with [`SEPARATOR_CLASS`]. The leading `.*` plus a
/// separator anchors the match at a directory boundary anywhere in an
/// absolute path.
///
/// ```
/// use spotless_staged::core::models::match_pattern;
///
/// assert_eq!(match_pattern("src/Main.java"), r".*[\\/]src[\\/]Main\.java");
/// ```
#[must_use]
pub fn match_pattern(path: &str) -> String {
    let segments: Vec<String> = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .map(regex::escape)
        .collect();

    format!(".*{SEPARATOR_CLASS}{}", segments.join(SEPARATOR_CLASS))
}
