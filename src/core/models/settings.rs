//! Resolved settings for one run

use glob::Pattern;

use super::{PassMode, WhitespacePolicy};

/// Goal run when nothing else is configured
pub const DEFAULT_GOAL: &str = "spotless:apply";

/// Everything the filter-and-invoke service needs to know
#[derive(Debug, Clone)]
pub struct FormatSettings {
    /// How files are passed to the formatter
    pub mode: PassMode,
    /// Whitespace differences to ignore
    pub whitespace: WhitespacePolicy,
    /// Include globs; empty means every candidate
    pub include: Vec<Pattern>,
    /// Formatting goal, used in messages
    pub goal: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            mode: PassMode::default(),
            whitespace: WhitespacePolicy::default(),
            include: Vec::new(),
            goal: DEFAULT_GOAL.to_string(),
        }
    }
}

impl FormatSettings {
    /// Whether a candidate passes the include filter
    #[must_use]
    pub fn includes(&self, file: &str) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let normalized = file.replace('\\', "/");
        self.include.iter().any(|p| p.matches(&normalized))
    }
}
