//! Repository configuration
//!
//! Optional settings live in `.spotless-staged.toml` at the repository root.
//! Every key has a default, and a missing file means "all defaults", which
//! reproduces the plain hook: `mvnw -B spotless:apply -DspotlessFiles=...`
//! with absolute paths.
//!
//! ```toml
//! mode = "patterns"
//! include = ["**/*.java"]
//!
//! [task]
//! args = ["-q"]
//! ```

use std::fs;
use std::path::Path;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_GOAL, FormatSettings, PassMode, Platform, WhitespacePolicy};
use crate::error::HookError;
use crate::paths;

/// Contents of `.spotless-staged.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    /// How files are passed to the formatter
    pub mode: PassMode,
    /// Whitespace differences that do not count as changes
    pub whitespace: WhitespacePolicy,
    /// Glob patterns a candidate must match; empty means all
    pub include: Vec<String>,
    /// Wrapper script names
    pub wrapper: WrapperConfig,
    /// Formatting goal invocation
    pub task: TaskConfig,
}

/// Wrapper script names per platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapperConfig {
    /// Script used on non-Windows hosts
    pub unix: String,
    /// Script used on Windows
    pub windows: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            unix: paths::UNIX_WRAPPER.to_string(),
            windows: paths::WINDOWS_WRAPPER.to_string(),
        }
    }
}

impl WrapperConfig {
    /// Wrapper file name for a platform
    #[must_use]
    pub fn file_name(&self, platform: Platform) -> &str {
        match platform {
            Platform::Windows => &self.windows,
            Platform::Unix => &self.unix,
        }
    }
}

/// How the formatting goal is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Goal to run
    pub goal: String,
    /// System property receiving the files argument
    pub property: String,
    /// Run Maven in batch mode (`-B`)
    pub batch: bool,
    /// Extra arguments appended after the property
    pub args: Vec<String>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL.to_string(),
            property: "spotlessFiles".to_string(),
            batch: true,
            args: Vec::new(),
        }
    }
}

impl HookConfig {
    /// Load the config under `root`, or defaults if there is none
    pub fn load(root: &Path) -> Result<Self, HookError> {
        let path = paths::config_file(root);
        if !path.exists() {
            log::debug!("no {} at {}, using defaults", paths::CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| HookError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parse config file content
    pub fn parse(content: &str) -> Result<Self, HookError> {
        toml::from_str(content)
            .map_err(|e| HookError::Config(format!("{}: {}", paths::CONFIG_FILE, e.message())))
    }

    /// Resolve into run settings, compiling include globs
    pub fn settings(&self) -> Result<FormatSettings, HookError> {
        let include = self
            .include
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    HookError::Config(format!("invalid include pattern {p:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FormatSettings {
            mode: self.mode,
            whitespace: self.whitespace,
            include,
            goal: self.task.goal.clone(),
        })
    }
}
