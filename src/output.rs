//! Output formatting for human and JSON modes
//!
//! Human mode streams progress lines as the run goes, so skip notices show
//! up before the build tool starts printing. JSON mode stays silent until the
//! end and prints a single document.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{PassMode, SkippedFile};
use crate::core::services::Plan;
use crate::error::HookError;

/// Tag in front of progress lines
const TAG: &str = "[Spotless]";

/// Tag in front of fatal errors
const ERROR_TAG: &str = "[HOOK ERROR]";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a formatting run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Whether the run succeeded
    pub success: bool,
    /// Repository root
    pub repo_root: String,
    /// Wrapper executable
    pub wrapper: String,
    /// How files were passed
    pub mode: PassMode,
    /// Files that qualified, in input order
    pub files: Vec<String>,
    /// Files that were skipped
    pub skipped: Vec<SkippedFile>,
    /// The joined formatter argument, if any file qualified
    pub files_arg: Option<String>,
    /// Whether the wrapper was run
    pub invoked: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Exit code of the run (0 unless the wrapper failed)
    pub exit_code: i32,
    /// Why the wrapper run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    /// Start a report from a plan; nothing has run yet
    #[must_use]
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            success: true,
            repo_root: plan.root.to_string_lossy().into_owned(),
            wrapper: plan.wrapper.to_string_lossy().into_owned(),
            mode: plan.mode,
            files: plan.selection.qualifying.clone(),
            skipped: plan.selection.skipped.clone(),
            files_arg: plan.files_arg(),
            invoked: false,
            dry_run: false,
            exit_code: 0,
            error: None,
        }
    }

    /// Record a failed wrapper run
    pub fn fail(&mut self, err: &HookError) {
        self.success = false;
        self.exit_code = err.exit_code();
        self.error = Some(err.to_string());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Error document for JSON mode
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    success: bool,
    error: String,
    exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
}

/// Prints progress for one run
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    mode: OutputMode,
}

impl Reporter {
    /// Create a reporter for the given mode
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Output mode in use
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Announce skipped files
    pub fn skipped(&self, skipped: &[SkippedFile]) {
        if self.mode != OutputMode::Human {
            return;
        }
        for s in skipped {
            println!("{} Skipping {} ({})", TAG.cyan(), s.file, s.reason);
        }
    }

    /// Announce that nothing qualified
    pub fn nothing_to_format(&self) {
        if self.mode == OutputMode::Human {
            println!("{} No staged files to format.", TAG.cyan());
        }
    }

    /// Announce the invocation that is about to run
    pub fn running(&self, goal: &str, files_arg: &str) {
        if self.mode == OutputMode::Human {
            println!("Running {goal} on staged files...");
            println!("Files: {files_arg}");
        }
    }

    /// Announce a dry run instead of the invocation
    pub fn dry_run(&self, command_line: &str) {
        if self.mode == OutputMode::Human {
            println!("{} Dry run, not invoking:", TAG.cyan());
            println!("  {command_line}");
        }
    }

    /// Print the final report (JSON mode only)
    pub fn finish(&self, report: &RunReport) {
        if self.mode == OutputMode::Json {
            println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
        }
    }

    /// Print a fatal error
    pub fn error(&self, err: &HookError) {
        match self.mode {
            OutputMode::Human => match err {
                // Plain usage line, as the hook always printed it
                HookError::NoFiles => println!("{err}"),
                _ => println!("{} {err}", ERROR_TAG.red().bold()),
            },
            // The run report already carries the failure
            OutputMode::Json if reported_by_run(err) => {},
            OutputMode::Json => {
                let report = ErrorReport {
                    success: false,
                    error: err.to_string(),
                    exit_code: err.exit_code(),
                    hint: error_hint(err),
                };
                println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            },
        }
    }
}

/// Errors raised while running the wrapper, after a plan exists
const fn reported_by_run(err: &HookError) -> bool {
    matches!(err, HookError::Spawn { .. } | HookError::ToolFailed { .. })
}

/// One-line hint for errors the user can fix
const fn error_hint(err: &HookError) -> Option<&'static str> {
    match err {
        HookError::NoFiles => Some("Pass the staged files to format as arguments"),
        HookError::WrapperMissing(_) => {
            Some("Generate one with `mvn wrapper:wrapper` or configure [wrapper] in .spotless-staged.toml")
        },
        _ => None,
    }
}
