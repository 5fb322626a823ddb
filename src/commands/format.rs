//! Filter staged files and run the formatting goal (the hook itself)

use spotless_staged::adapters::git::GitVersionControl;
use spotless_staged::adapters::maven::MavenWrapper;
use spotless_staged::config::HookConfig;
use spotless_staged::core::models::{PassMode, Platform};
use spotless_staged::core::services::{Outcome, StagedFormatter, resolve_root};
use spotless_staged::error::HookError;
use spotless_staged::output::{OutputMode, Reporter, RunReport};

/// Command-line overrides for a formatting run
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Overrides the configured pass mode
    pub mode: Option<PassMode>,
    /// Plan only, never invoke the wrapper
    pub dry_run: bool,
}

/// Format the given staged files (pre-commit hook)
pub fn format(
    files: &[String],
    options: FormatOptions,
    reporter: Reporter,
) -> Result<(), HookError> {
    // Usage errors must not touch git
    if files.is_empty() {
        return Err(HookError::NoFiles);
    }

    let vcs = GitVersionControl::current_dir()?;
    let root = resolve_root(&vcs)?;

    let config = HookConfig::load(&root)?;
    let mut settings = config.settings()?;
    if let Some(mode) = options.mode {
        settings.mode = mode;
    }

    let maven = MavenWrapper::new(&config, Platform::current())
        .stdout_to_stderr(reporter.mode() == OutputMode::Json);
    let formatter = StagedFormatter::new(&vcs, &maven, &settings);

    let plan = formatter.plan(root, files)?;
    reporter.skipped(&plan.selection.skipped);

    let mut report = RunReport::from_plan(&plan);
    let Some(request) = plan.request() else {
        reporter.nothing_to_format();
        reporter.finish(&report);
        return Ok(());
    };

    if options.dry_run {
        reporter.dry_run(&maven.command_line(&request));
        report.dry_run = true;
        reporter.finish(&report);
        return Ok(());
    }

    reporter.running(&settings.goal, &request.files_arg);
    report.invoked = true;

    match formatter.execute(&plan) {
        Ok(Outcome::Formatted { files }) => log::debug!("formatted {files} file(s)"),
        Ok(Outcome::NothingToFormat) => {},
        Err(err) => {
            report.fail(&err);
            reporter.finish(&report);
            return Err(err);
        },
    }

    reporter.finish(&report);
    Ok(())
}
