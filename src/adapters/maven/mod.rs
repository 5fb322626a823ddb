//! Maven wrapper adapter
//!
//! Implements `BuildTool` by running `mvnw` (or `mvnw.cmd`) from the
//! repository root:
//!
//! ```text
//! mvnw -B spotless:apply -DspotlessFiles=<files>
//! ```

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::{HookConfig, TaskConfig, WrapperConfig};
use crate::core::models::Platform;
use crate::core::ports::{ApplyRequest, BuildTool, WrapperLookup};

/// Maven wrapper implementation
#[derive(Debug, Clone)]
pub struct MavenWrapper {
    wrapper: WrapperConfig,
    task: TaskConfig,
    platform: Platform,
    stdout_to_stderr: bool,
}

impl MavenWrapper {
    /// Create an adapter from configuration for the given platform
    #[must_use]
    pub fn new(config: &HookConfig, platform: Platform) -> Self {
        Self {
            wrapper: config.wrapper.clone(),
            task: config.task.clone(),
            platform,
            stdout_to_stderr: false,
        }
    }

    /// Send the wrapper's stdout to our stderr
    ///
    /// Keeps stdout clean for machine-readable output.
    #[must_use]
    pub fn stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    /// Arguments passed to the wrapper for a files argument
    #[must_use]
    pub fn args(&self, files_arg: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(3 + self.task.args.len());
        if self.task.batch {
            args.push("-B".to_string());
        }
        args.push(self.task.goal.clone());
        args.push(format!("-D{}={files_arg}", self.task.property));
        args.extend(self.task.args.iter().cloned());
        args
    }

    /// Full command line for display
    #[must_use]
    pub fn command_line(&self, request: &ApplyRequest) -> String {
        let mut parts = vec![request.wrapper.to_string_lossy().into_owned()];
        parts.extend(self.args(&request.files_arg));
        parts.join(" ")
    }
}

impl BuildTool for MavenWrapper {
    fn locate_wrapper(&self, root: &Path) -> WrapperLookup {
        let path = root.join(self.wrapper.file_name(self.platform));
        if path.is_file() {
            WrapperLookup::Found(path)
        } else {
            WrapperLookup::Missing(path)
        }
    }

    fn apply(&self, request: &ApplyRequest) -> anyhow::Result<i32> {
        let args = self.args(&request.files_arg);
        log::debug!("{} {}", request.wrapper.display(), args.join(" "));

        let mut command = Command::new(&request.wrapper);
        command.args(&args).current_dir(&request.root);
        if self.stdout_to_stderr {
            command.stdout(Stdio::from(io::stderr()));
        }

        let status = command.status()?;
        log::debug!("{} exited with {status}", request.wrapper.display());

        // Killed by a signal: no code, still a failure
        Ok(status.code().unwrap_or(1))
    }
}
