// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CommandExecutor, CommandOutput, GitCli};

#[test]
fn test_unknown_program_is_reported() {
    let err = GitCli::new("gitdesk-no-such-binary").expect_err("must not resolve");
    assert!(err.to_string().contains("gitdesk-no-such-binary"));
}

#[test]
fn test_non_zero_exit_is_data() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let git = GitCli::new("git").expect("git on PATH");
    // not a repository: git exits 128, run() still succeeds
    let output = git
        .run(&["rev-parse", "--show-toplevel"], temp.path())
        .expect("spawn succeeds");
    assert!(!output.success());
    assert_ne!(output.exit_code(), 0);
    assert!(!output.stderr().is_empty());
}

#[test]
fn test_output_is_not_trimmed() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let git = GitCli::new("git").expect("git on PATH");
    let output = git.run(&["--version"], temp.path()).expect("spawn succeeds");
    assert!(output.success());
    assert!(output.stdout().starts_with("git version"));
    assert!(output.stdout().ends_with('\n'));
}

#[test]
fn test_options_are_prepended() {
    let git = GitCli::new("git")
        .expect("git on PATH")
        .with_options(["core.quotePath=false".to_string()]);
    let full = git.full_args(&["status"]);
    assert_eq!(full, vec!["-c", "core.quotePath=false", "status"]);
    assert_eq!(git.describe(&full), "git -c core.quotePath=false status");
}

#[test]
fn test_command_output_accessors() {
    let output = CommandOutput::new(1, "out\n".to_string(), "err\n".to_string());
    assert!(!output.success());
    assert_eq!(output.stdout(), "out\n");
    assert_eq!(output.stderr(), "err\n");
    assert_eq!(output.into_stdout(), "out\n");
}
