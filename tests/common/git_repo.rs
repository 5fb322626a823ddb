//! Temporary git repository helper for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TempGitRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    /// Create a new temporary git repository
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().to_path_buf();

        let repo = Self {
            _temp_dir: temp_dir,
            path,
        };

        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "core.autocrlf", "false"]);

        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository root as git reports it (symlinks resolved)
    pub fn root(&self) -> PathBuf {
        let output = self.git(&["rev-parse", "--show-toplevel"]);
        PathBuf::from(String::from_utf8_lossy(&output.stdout).trim())
    }

    /// Write a file to the repository
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(file_path, content).expect("Failed to write file");
    }

    /// Stage a file
    pub fn stage(&self, name: &str) {
        let output = self.git(&["add", "--", name]);
        assert!(output.status.success(), "Failed to stage {name}");
    }

    /// Commit staged changes
    pub fn commit(&self, message: &str) {
        let output = self.git(&["commit", "-m", message]);
        assert!(output.status.success(), "Failed to commit: {output:?}");
    }

    /// Write, stage and commit a file in one go
    pub fn commit_file(&self, name: &str, content: &str) {
        self.write_file(name, content);
        self.stage(name);
        self.commit(&format!("Add {name}"));
    }

    /// Run a git command and return output
    pub fn git(&self, args: &[&str]) -> std::process::Output {
        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .expect("Failed to run git command")
    }
}

impl Default for TempGitRepo {
    fn default() -> Self {
        Self::new()
    }
}
