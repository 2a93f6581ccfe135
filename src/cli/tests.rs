// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::refs::{BranchSubcommand, TagSubcommand};
use crate::cli::remote::RemoteSubcommand;
use crate::cli::submodule::SubmoduleSubcommand;
use crate::cli::{Cli, Command};
use crate::config::types::BackendKind;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("gitdesk").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn test_parse_version() {
    let cli = parse(&["version"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = parse(&[]);
    assert!(cli.command.is_none());
    assert_eq!(cli.global.repo_path(), PathBuf::from("."));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = parse(&["status", "-C", "/tmp/tree", "--backend", "shell", "-l", "4"]);
    assert_eq!(cli.global.repo, Some(PathBuf::from("/tmp/tree")));
    assert_eq!(cli.global.backend, Some(BackendKind::Shell));
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            ("global.log_level", "4".to_string()),
            ("global.file_log_level", "4".to_string()),
            ("git.backend", "shell".to_string()),
        ]
    );
}

#[test]
fn test_parse_rejects_unknown_backend() {
    let err = Cli::try_parse_from(["gitdesk", "--backend", "svn", "status"]).expect_err("bad backend");
    assert!(err.to_string().contains("expected 'gix' or 'shell'"), "got: {err}");
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["gitdesk", "-l", "7", "status"]).is_err());
}

#[test]
fn test_parse_status() {
    let cli = parse(&["status", "--json", "--prefix", "src/"]);
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status");
    };
    assert!(args.json);
    assert_eq!(args.prefix.as_deref(), Some("src/"));
}

#[test]
fn test_parse_stage_takes_flag_like_paths_after_separator() {
    let cli = parse(&["stage", "a.txt", "--", "--force"]);
    let Some(Command::Stage(args)) = cli.command else {
        panic!("expected stage");
    };
    assert_eq!(args.paths, vec!["a.txt", "--force"]);
}

#[test]
fn test_parse_stage_requires_paths() {
    assert!(Cli::try_parse_from(["gitdesk", "stage"]).is_err());
}

#[test]
fn test_parse_commit_and_diff() {
    let cli = parse(&["commit", "-m", "first line\n\nbody"]);
    let Some(Command::Commit(args)) = cli.command else {
        panic!("expected commit");
    };
    assert_eq!(args.message, "first line\n\nbody");

    let cli = parse(&["diff", "--cached", "file.txt"]);
    let Some(Command::Diff(args)) = cli.command else {
        panic!("expected diff");
    };
    assert!(args.cached);
    assert_eq!(args.path, "file.txt");
}

#[test]
fn test_parse_log_and_search() {
    let cli = parse(&["log", "-n", "5"]);
    let Some(Command::Log(args)) = cli.command else {
        panic!("expected log");
    };
    assert_eq!(args.max_count, Some(5));
    assert!(Cli::try_parse_from(["gitdesk", "log", "-n", "0"]).is_err());

    let cli = parse(&["search", "fix", "--author", "Ada"]);
    let Some(Command::Search(args)) = cli.command else {
        panic!("expected search");
    };
    assert_eq!(args.pattern, "fix");
    assert_eq!(args.author.as_deref(), Some("Ada"));
}

#[test]
fn test_parse_branch_and_tag() {
    let cli = parse(&["branch", "delete", "feature", "-f"]);
    let Some(Command::Branch(args)) = cli.command else {
        panic!("expected branch");
    };
    assert!(matches!(
        args.subcommand,
        BranchSubcommand::Delete { ref name, force: true } if name == "feature"
    ));

    let cli = parse(&["branch", "create", "topic", "v1.0"]);
    let Some(Command::Branch(args)) = cli.command else {
        panic!("expected branch");
    };
    assert!(matches!(
        args.subcommand,
        BranchSubcommand::Create { ref name, start_point: Some(ref start) }
            if name == "topic" && start == "v1.0"
    ));

    let cli = parse(&["tag", "create", "v1.0", "-m", "release"]);
    let Some(Command::Tag(args)) = cli.command else {
        panic!("expected tag");
    };
    assert!(matches!(
        args.subcommand,
        TagSubcommand::Create { ref name, message: Some(ref m) } if name == "v1.0" && m == "release"
    ));
}

#[test]
fn test_parse_remote_commands() {
    let cli = parse(&["push-review", "-r", "upstream"]);
    let Some(Command::PushReview(args)) = cli.command else {
        panic!("expected push-review");
    };
    assert_eq!(args.remote.as_deref(), Some("upstream"));
    assert!(args.branch.is_none());

    let cli = parse(&["pull", "origin", "main"]);
    let Some(Command::Pull(args)) = cli.command else {
        panic!("expected pull");
    };
    assert_eq!(args.remote.as_deref(), Some("origin"));
    assert_eq!(args.branch.as_deref(), Some("main"));

    let cli = parse(&["remote", "add", "origin", "https://example.invalid/r.git"]);
    let Some(Command::Remote(args)) = cli.command else {
        panic!("expected remote");
    };
    assert!(matches!(args.subcommand, RemoteSubcommand::Add { ref name, .. } if name == "origin"));
}

#[test]
fn test_parse_submodule() {
    let cli = parse(&["submodule", "add", "../lib.git", "vendor/lib", "--name", "lib"]);
    let Some(Command::Submodule(args)) = cli.command else {
        panic!("expected submodule");
    };
    assert!(matches!(
        args.subcommand,
        SubmoduleSubcommand::Add { ref path, name: Some(ref n), .. } if path == "vendor/lib" && n == "lib"
    ));

    let cli = parse(&["submodule", "remove", "vendor/lib"]);
    assert!(matches!(
        cli.command,
        Some(Command::Submodule(ref args))
            if matches!(args.subcommand, SubmoduleSubcommand::Remove { ref path } if path == "vendor/lib")
    ));
}
