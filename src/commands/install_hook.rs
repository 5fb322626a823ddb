//! Install the pre-commit hook

use spotless_staged::adapters::git::{GitVersionControl, install_pre_commit};
use spotless_staged::error::HookError;
use spotless_staged::output::{OperationResult, OutputMode};

/// Install (or reinstall with `force`) the pre-commit hook
pub fn install_hook(force: bool, glob: &str, mode: OutputMode) -> Result<(), HookError> {
    let vcs = GitVersionControl::current_dir()?;
    let hooks_dir = vcs
        .hooks_dir()
        .map_err(|e| HookError::NotARepository(format!("{e:#}")))?;

    let outcome = install_pre_commit(&hooks_dir, glob, force)?;
    log::debug!("pre-commit hook at {}: {outcome:?}", hooks_dir.display());

    OperationResult {
        success: true,
        message: outcome.to_string(),
    }
    .render(mode);

    Ok(())
}
