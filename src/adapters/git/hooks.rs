//! Git hook installation
//!
//! Writes a `pre-commit` hook that hands the staged files matching a glob to
//! `spotless-staged`. Our part of the hook sits between marker lines so it
//! can live next to other tools' hook code and be replaced in place.

use std::fs;
use std::path::Path;

use crate::paths;

/// First line of our hook section
pub const BEGIN_MARKER: &str = "# >>> spotless-staged >>>";

/// Last line of our hook section
pub const END_MARKER: &str = "# <<< spotless-staged <<<";

/// Command the hook runs; any mention of it counts as installed
const TOOL_NAME: &str = "spotless-staged";

/// What [`install_pre_commit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookInstall {
    /// No hook existed; a new one was written
    Created,
    /// A foreign hook existed; our section was appended
    Appended,
    /// Our section existed and was rewritten (`force`)
    Replaced,
    /// Our section existed and was left alone
    AlreadyInstalled,
}

impl std::fmt::Display for HookInstall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "Installed pre-commit hook"),
            Self::Appended => write!(f, "Added spotless-staged to existing pre-commit hook"),
            Self::Replaced => write!(f, "Reinstalled pre-commit hook"),
            Self::AlreadyInstalled => {
                write!(f, "Pre-commit hook already installed (use --force to reinstall)")
            },
        }
    }
}

/// Our hook section for files matching `glob`
///
/// File names are split on newlines only, with globbing off, and passed
/// after `--` so names with spaces or a leading `-` reach us intact.
#[must_use]
pub fn hook_section(glob: &str) -> String {
    format!(
        r#"{BEGIN_MARKER}
(
    set -f
    IFS='
'
    set --
    for file in $(git -c core.quotePath=false diff --cached --name-only --diff-filter=ACMR -- '{glob}'); do
        set -- "$@" "$file"
    done
    if [ $# -gt 0 ]; then
        exec spotless-staged -- "$@"
    fi
) || exit $?
{END_MARKER}
"#
    )
}

/// Complete hook file holding only our section
fn new_hook(section: &str) -> String {
    format!(
        "#!/bin/sh\n# {TOOL_NAME} pre-commit hook\n# Formats staged files with substantive changes\n\n{section}"
    )
}

/// Strip our section (markers included) from hook content
#[must_use]
pub fn remove_section(content: &str) -> String {
    let mut kept = Vec::new();
    let mut inside = false;
    for line in content.lines() {
        if line.trim() == BEGIN_MARKER {
            inside = true;
        } else if line.trim() == END_MARKER {
            inside = false;
        } else if !inside {
            kept.push(line);
        }
    }

    let mut result = kept.join("\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}

/// Install the pre-commit hook into `hooks_dir`
///
/// # Errors
///
/// Returns an error if `glob` cannot be quoted safely or the hook cannot be
/// written.
pub fn install_pre_commit(hooks_dir: &Path, glob: &str, force: bool) -> anyhow::Result<HookInstall> {
    if glob.is_empty() || glob.contains('\'') {
        anyhow::bail!("Unsupported glob for hook: {glob:?}");
    }

    fs::create_dir_all(hooks_dir)?;
    let hook_path = paths::pre_commit_hook(hooks_dir);
    let section = hook_section(glob);

    let outcome = if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if existing.contains(BEGIN_MARKER) {
            if !force {
                return Ok(HookInstall::AlreadyInstalled);
            }
            let stripped = remove_section(&existing);
            fs::write(&hook_path, format!("{}\n\n{section}", stripped.trim_end()))?;
            HookInstall::Replaced
        } else if existing.contains(TOOL_NAME) {
            // Hand-written call without our markers
            if !force {
                return Ok(HookInstall::AlreadyInstalled);
            }
            fs::write(&hook_path, new_hook(&section))?;
            HookInstall::Replaced
        } else {
            fs::write(&hook_path, format!("{}\n\n{section}", existing.trim_end()))?;
            HookInstall::Appended
        }
    } else {
        fs::write(&hook_path, new_hook(&section))?;
        HookInstall::Created
    };

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(outcome)
}
