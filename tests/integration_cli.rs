// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the gitdesk binary.
//!
//! Runs the built executable against temporary repositories and checks
//! stdout, stderr and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use gitdesk::cli::{Cli, Command as CliCommand};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .status()
        .expect("failed to spawn git");
    assert!(status.success(), "git {args:?} failed");
}

fn init_test_repo_with_commit(dir: &Path) {
    run_git(&["init", "-q"], dir);
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
    run_git(&["config", "commit.gpgsign", "false"], dir);
    fs::write(dir.join("file.txt"), "hello").expect("write file.txt");
    run_git(&["add", "file.txt"], dir);
    run_git(&["commit", "-q", "-m", "init"], dir);
}

/// Run the binary with `-C dir`, isolated from any gitdesk.toml or env config.
fn gitdesk(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gitdesk"))
        .arg("-C")
        .arg(dir)
        .args(args)
        .current_dir(dir)
        .env_remove("GITDESK_GIT__BACKEND")
        .output()
        .expect("failed to run gitdesk")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["gitdesk", "version"]).expect("parses");
    assert!(matches!(cli.command, Some(CliCommand::Version)));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["gitdesk", "rebase"]).is_err());
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_status_plain_and_json() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    fs::write(temp.path().join("new.txt"), "new").expect("write");
    fs::write(temp.path().join("file.txt"), "hello world").expect("write");

    for backend in ["gix", "shell"] {
        let output = gitdesk(temp.path(), &["--backend", backend, "status"]);
        assert!(output.status.success(), "{backend}: {}", stderr(&output));
        assert_eq!(stdout(&output), " M\tfile.txt\n??\tnew.txt\n", "{backend}");
    }

    let output = gitdesk(temp.path(), &["status", "--json", "--prefix", "new"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(json, serde_json::json!([{ "path": "new.txt", "status": "??" }]));
}

#[test]
fn binary_stage_commit_log_flow() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    fs::write(temp.path().join("a.txt"), "a").expect("write");

    assert!(gitdesk(temp.path(), &["stage", "a.txt"]).status.success());
    let output = gitdesk(temp.path(), &["commit", "-m", "add a"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let output = gitdesk(temp.path(), &["log", "-n", "1"]);
    let log = stdout(&output);
    assert!(log.trim_end().ends_with(" add a"), "got: {log}");
    assert_eq!(log.split(' ').next().map(str::len), Some(7));
}

#[test]
fn binary_push_review_placeholder() {
    let temp = temp_dir();
    let remote = temp.path().join("remote.git");
    let local = temp.path().join("local");
    fs::create_dir_all(&remote).expect("mkdir");
    fs::create_dir_all(&local).expect("mkdir");
    run_git(&["init", "-q", "--bare"], &remote);
    init_test_repo_with_commit(&local);

    let remote_str = remote.to_str().expect("utf-8 path");
    assert!(gitdesk(&local, &["remote", "add", "origin", remote_str]).status.success());
    run_git(&["push", "-q", "-u", "origin", "HEAD"], &local);

    let output = gitdesk(&local, &["push-review"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Nothing to push\n");
}

#[test]
fn binary_reports_errors_with_failure_exit() {
    let temp = temp_dir();
    let output = gitdesk(temp.path(), &["status"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("is not a git repository"), "got: {}", stderr(&output));

    init_test_repo_with_commit(temp.path());
    let output = gitdesk(temp.path(), &["checkout", "no-such-branch"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: "), "got: {}", stderr(&output));
}

#[test]
fn binary_options_reflect_flags() {
    let temp = temp_dir();
    let output = gitdesk(temp.path(), &["--backend", "shell", "options"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("git.backend           = shell"));
}

#[test]
fn binary_init_creates_repository() {
    let temp = temp_dir();
    let target = temp.path().join("fresh");
    let output = gitdesk(temp.path(), &["init", target.to_str().expect("utf-8 path")]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(target.join(".git").is_dir());
}
