//! Filter-and-invoke service
//!
//! A run has two phases. [`StagedFormatter::plan`] locates the wrapper and
//! decides which candidates qualify; nothing is executed yet, so the caller
//! can report skips or stop for a dry run. [`StagedFormatter::execute`] then
//! runs the formatting goal once with every qualifying file.

use std::path::PathBuf;

use crate::core::models::{FileSelection, FormatSettings, PassMode, SkipReason};
use crate::core::ports::{ApplyRequest, BuildTool, VersionControl, WrapperLookup};
use crate::error::HookError;

/// What a run is about to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Repository root
    pub root: PathBuf,
    /// Wrapper executable found at the root
    pub wrapper: PathBuf,
    /// How files are rendered in the argument
    pub mode: PassMode,
    /// Qualifying and skipped candidates
    pub selection: FileSelection,
}

impl Plan {
    /// The joined formatter argument, if anything qualifies
    #[must_use]
    pub fn files_arg(&self) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        Some(self.mode.join(&self.root, &self.selection.qualifying))
    }

    /// The wrapper invocation, if anything qualifies
    #[must_use]
    pub fn request(&self) -> Option<ApplyRequest> {
        self.files_arg().map(|files_arg| ApplyRequest {
            root: self.root.clone(),
            wrapper: self.wrapper.clone(),
            files_arg,
        })
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No candidate qualified; the wrapper was not run
    NothingToFormat,
    /// The goal ran and succeeded
    Formatted {
        /// Number of files passed to the goal
        files: usize,
    },
}

/// Resolve the repository root, classifying failure as "not a repository"
pub fn resolve_root(vcs: &dyn VersionControl) -> Result<PathBuf, HookError> {
    vcs.repo_root().map_err(|e| HookError::NotARepository(format!("{e:#}")))
}

/// Filters candidates and drives the build tool
pub struct StagedFormatter<'a> {
    vcs: &'a dyn VersionControl,
    tool: &'a dyn BuildTool,
    settings: &'a FormatSettings,
}

impl std::fmt::Debug for StagedFormatter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StagedFormatter").field("settings", self.settings).finish_non_exhaustive()
    }
}

impl<'a> StagedFormatter<'a> {
    /// Create a formatter over the given ports
    #[must_use]
    pub fn new(
        vcs: &'a dyn VersionControl,
        tool: &'a dyn BuildTool,
        settings: &'a FormatSettings,
    ) -> Self {
        Self {
            vcs,
            tool,
            settings,
        }
    }

    /// Decide what to format under `root`
    ///
    /// The wrapper is checked before any per-file query, so a missing wrapper
    /// never costs a git call per file.
    pub fn plan(&self, root: PathBuf, files: &[String]) -> Result<Plan, HookError> {
        if files.is_empty() {
            return Err(HookError::NoFiles);
        }

        let wrapper = match self.tool.locate_wrapper(&root) {
            WrapperLookup::Found(path) => path,
            WrapperLookup::Missing(expected) => return Err(HookError::WrapperMissing(expected)),
        };

        let mut selection = FileSelection::default();
        for file in files {
            if !self.settings.includes(file) {
                log::debug!("{file} excluded by include patterns");
                selection.skip(file, SkipReason::NotIncluded);
                continue;
            }

            match self.vcs.has_substantive_changes(&root, file, self.settings.whitespace) {
                Ok(true) => selection.keep(file),
                Ok(false) => selection.skip(file, SkipReason::WhitespaceOnly),
                Err(e) => {
                    log::warn!("could not diff {file}: {e:#}");
                    selection.skip(file, SkipReason::WhitespaceOnly);
                },
            }
        }

        Ok(Plan {
            root,
            wrapper,
            mode: self.settings.mode,
            selection,
        })
    }

    /// Run the formatting goal for a plan
    ///
    /// Does nothing when no file qualified. A non-zero exit from the wrapper
    /// becomes [`HookError::ToolFailed`] carrying that code.
    pub fn execute(&self, plan: &Plan) -> Result<Outcome, HookError> {
        let Some(request) = plan.request() else {
            return Ok(Outcome::NothingToFormat);
        };

        let code = self.tool.apply(&request).map_err(|e| HookError::Spawn {
            wrapper: request.wrapper.clone(),
            message: format!("{e:#}"),
        })?;

        if code == 0 {
            Ok(Outcome::Formatted {
                files: plan.selection.qualifying.len(),
            })
        } else {
            Err(HookError::ToolFailed {
                goal: self.settings.goal.clone(),
                code,
            })
        }
    }
}
