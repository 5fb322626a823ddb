//! Hook installation through the CLI

use std::env;
use std::fs;
use std::process::Command;

use assert_cmd::cargo;
use predicates::prelude::*;

use super::common::fixtures::recorded_args;
use super::common::git_repo::TempGitRepo;
use super::spotless_staged;

/// `PATH` with the built binary's directory in front
fn path_with_binary() -> std::ffi::OsString {
    let bin_dir = cargo::cargo_bin!("spotless-staged")
        .parent()
        .expect("binary has a parent directory")
        .to_path_buf();
    let mut dirs = vec![bin_dir];
    if let Some(path) = env::var_os("PATH") {
        dirs.extend(env::split_paths(&path));
    }
    env::join_paths(dirs).expect("PATH entries are joinable")
}

/// Run `git commit` in `repo` with the built binary on `PATH`
fn commit_through_hook(repo: &TempGitRepo, message: &str) -> std::process::Output {
    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(repo.path())
        .env("PATH", path_with_binary())
        .output()
        .expect("Failed to run git commit")
}

#[test]
fn test_install_hook_creates_pre_commit() {
    let repo = TempGitRepo::new();

    spotless_staged()
        .arg("install-hook")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed pre-commit hook"));

    let hook = fs::read_to_string(repo.path().join(".git/hooks/pre-commit")).unwrap();
    assert!(hook.contains("exec spotless-staged -- \"$@\""));
    assert!(hook.contains("-- '*.java'"));
}

#[test]
fn test_install_hook_twice_is_noop() {
    let repo = TempGitRepo::new();

    spotless_staged().arg("install-hook").current_dir(repo.path()).assert().success();
    spotless_staged()
        .arg("install-hook")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));
}

#[test]
fn test_install_hook_force_with_glob() {
    let repo = TempGitRepo::new();

    spotless_staged().arg("install-hook").current_dir(repo.path()).assert().success();
    spotless_staged()
        .args(["install-hook", "--force", "--glob", "*.kt"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reinstalled"));

    let hook = fs::read_to_string(repo.path().join(".git/hooks/pre-commit")).unwrap();
    assert!(hook.contains("-- '*.kt'"));
    assert!(!hook.contains("-- '*.java'"));
}

#[test]
fn test_install_hook_outside_repository() {
    let temp = tempfile::TempDir::new().unwrap();

    spotless_staged()
        .arg("install-hook")
        .current_dir(temp.path())
        .env("GIT_CEILING_DIRECTORIES", temp.path().parent().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not a git repository"));
}

#[cfg(unix)]
#[test]
fn test_hook_passes_names_with_spaces_intact() {
    let repo = TempGitRepo::new();
    repo.commit_file("My File.java", "class MyFile {}\n");
    super::common::fixtures::install_fake_wrapper(repo.path());
    spotless_staged().arg("install-hook").current_dir(repo.path()).assert().success();

    repo.write_file("My File.java", "class MyFile { int x; }\n");
    repo.stage("My File.java");

    let output = commit_through_hook(&repo, "Change My File");
    assert!(output.status.success(), "commit failed: {output:?}");

    // git sends hook output to stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Skipping My "), "name was split: {stderr}");

    let expected = format!("-DspotlessFiles={}/My File.java", repo.root().display());
    assert_eq!(
        recorded_args(repo.path()),
        Some(vec!["-B".to_string(), "spotless:apply".to_string(), expected])
    );
}

#[cfg(unix)]
#[test]
fn test_hook_passes_names_with_leading_dash() {
    let repo = TempGitRepo::new();
    repo.commit_file("-x.java", "class X {}\n");
    super::common::fixtures::install_fake_wrapper(repo.path());
    spotless_staged().arg("install-hook").current_dir(repo.path()).assert().success();

    repo.write_file("-x.java", "class X { int x; }\n");
    repo.stage("-x.java");

    let output = commit_through_hook(&repo, "Change -x");
    assert!(output.status.success(), "commit failed: {output:?}");

    let expected = format!("-DspotlessFiles={}/-x.java", repo.root().display());
    assert_eq!(
        recorded_args(repo.path()),
        Some(vec!["-B".to_string(), "spotless:apply".to_string(), expected])
    );
}

#[cfg(unix)]
#[test]
fn test_hook_skips_commit_without_matching_files() {
    let repo = TempGitRepo::new();
    super::common::fixtures::install_fake_wrapper(repo.path());
    spotless_staged().arg("install-hook").current_dir(repo.path()).assert().success();

    repo.write_file("notes.txt", "hello\n");
    repo.stage("notes.txt");

    let output = commit_through_hook(&repo, "Add notes");
    assert!(output.status.success(), "commit failed: {output:?}");
    assert_eq!(recorded_args(repo.path()), None);
}
