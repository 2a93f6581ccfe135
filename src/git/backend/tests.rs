// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use super::{GitQuery, GixBackend, ShellBackend, query_backend};
use crate::config::types::{BackendKind, GitConfig};
use crate::git::status::FileStatus;
use crate::git::test_support::{git, init_repo_with_commit, temp_dir};

fn shell() -> ShellBackend {
    ShellBackend::from_config(&GitConfig::default()).expect("git on PATH")
}

fn sorted_pairs(statuses: &[FileStatus]) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = statuses
        .iter()
        .map(|s| (s.path().to_string(), s.code()))
        .collect();
    pairs.sort();
    pairs
}

/// Working tree exercising every slot combination the reconciler handles.
fn busy_tree(root: &Path) {
    init_repo_with_commit(root);
    fs::write(root.join("keep.txt"), "keep").expect("write");
    fs::write(root.join("old.txt"), "rename me, long enough to be detected\n").expect("write");
    fs::write(root.join("gone.txt"), "gone").expect("write");
    git(root, &["add", "keep.txt", "old.txt", "gone.txt"]);
    git(root, &["commit", "-q", "-m", "more files"]);

    // staged modification + worktree modification
    fs::write(root.join("file.txt"), "hello staged").expect("write");
    git(root, &["add", "file.txt"]);
    fs::write(root.join("file.txt"), "hello staged and edited").expect("write");
    // worktree-only modification
    fs::write(root.join("keep.txt"), "keep edited").expect("write");
    // staged rename
    git(root, &["mv", "old.txt", "new.txt"]);
    // worktree deletion
    fs::remove_file(root.join("gone.txt")).expect("remove");
    // staged add then deleted from worktree
    fs::write(root.join("added.txt"), "added").expect("write");
    git(root, &["add", "added.txt"]);
    fs::remove_file(root.join("added.txt")).expect("remove");
    // untracked, including one inside a new directory
    fs::write(root.join("untracked.txt"), "u").expect("write");
    fs::create_dir_all(root.join("dir")).expect("mkdir");
    fs::write(root.join("dir/nested.txt"), "n").expect("write");
    // untracked repository inside the tree
    let nested = root.join("nested");
    fs::create_dir_all(&nested).expect("mkdir");
    init_repo_with_commit(&nested);
}

#[test]
fn test_work_tree_validation() {
    let temp = temp_dir();
    let backends: [Box<dyn GitQuery>; 2] = [Box::new(GixBackend), Box::new(shell())];

    for backend in &backends {
        let err = backend.work_tree(temp.path()).expect_err("plain dir");
        assert!(err.is_not_a_repository(), "{}: {err}", backend.name());
    }

    init_repo_with_commit(temp.path());
    fs::create_dir_all(temp.path().join("sub")).expect("mkdir");
    for backend in &backends {
        let root = backend.work_tree(temp.path()).expect("work tree root");
        assert_eq!(root, temp.path().canonicalize().expect("canonical"));
        let err = backend
            .work_tree(&temp.path().join("sub"))
            .expect_err("subdirectory is not a root");
        assert!(err.is_not_a_repository(), "{}: {err}", backend.name());
        let err = backend
            .work_tree(&temp.path().join("missing"))
            .expect_err("missing path");
        assert!(err.is_not_a_repository(), "{}: {err}", backend.name());
    }
}

#[test]
fn test_bare_repository_rejected() {
    let temp = temp_dir();
    git(temp.path(), &["init", "-q", "--bare"]);
    for backend in [Box::new(GixBackend) as Box<dyn GitQuery>, Box::new(shell())] {
        let err = backend.work_tree(temp.path()).expect_err("bare repo");
        assert!(err.is_not_a_repository(), "{}: {err}", backend.name());
    }
}

#[test]
fn test_backends_agree_on_status() {
    let temp = temp_dir();
    busy_tree(temp.path());

    let gix_status = GixBackend.status(temp.path()).expect("gix status");
    let shell_status = shell().status(temp.path()).expect("shell status");

    assert_eq!(sorted_pairs(&gix_status), sorted_pairs(&shell_status));
    let rendered = sorted_pairs(&shell_status)
        .into_iter()
        .map(|(path, code)| format!("[{code}] {path}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    [AD] added.txt
    [??] dir/nested.txt
    [MM] file.txt
    [ D] gone.txt
    [ M] keep.txt
    [??] nested
    [R ] new.txt
    [??] untracked.txt
    ");
}

#[test]
fn test_untracked_entries_come_last() {
    let temp = temp_dir();
    busy_tree(temp.path());
    for backend in [Box::new(GixBackend) as Box<dyn GitQuery>, Box::new(shell())] {
        let statuses = backend.status(temp.path()).expect("status");
        let first_untracked = statuses
            .iter()
            .position(FileStatus::is_untracked)
            .expect("has untracked");
        assert!(
            statuses[first_untracked..].iter().all(FileStatus::is_untracked),
            "{}: untracked entries must trail tracked ones",
            backend.name()
        );
    }
}

#[test]
fn test_clean_tree_has_empty_status() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    assert!(GixBackend.status(temp.path()).expect("gix").is_empty());
    assert!(shell().status(temp.path()).expect("shell").is_empty());
}

#[test]
fn test_backends_agree_on_branches_and_head() {
    let temp = temp_dir();
    let default_branch = init_repo_with_commit(temp.path());
    git(temp.path(), &["branch", "zeta"]);
    git(temp.path(), &["branch", "alpha"]);
    git(temp.path(), &["tag", "alpha-tag"]);

    for backend in [Box::new(GixBackend) as Box<dyn GitQuery>, Box::new(shell())] {
        let mut expected = vec!["alpha".to_string(), default_branch.clone(), "zeta".to_string()];
        expected.sort();
        assert_eq!(backend.branches(temp.path()).expect("branches"), expected);
        assert_eq!(
            backend.current_branch(temp.path()).expect("head"),
            Some(default_branch.clone())
        );
    }

    git(temp.path(), &["checkout", "-q", "--detach"]);
    for backend in [Box::new(GixBackend) as Box<dyn GitQuery>, Box::new(shell())] {
        assert_eq!(backend.current_branch(temp.path()).expect("head"), None);
    }
}

#[test]
fn test_backends_agree_on_remotes_and_git_dir() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    git(temp.path(), &["remote", "add", "upstream", "https://example.invalid/u.git"]);
    git(temp.path(), &["remote", "add", "origin", "https://example.invalid/o.git"]);

    let git_dir = temp.path().canonicalize().expect("canonical").join(".git");
    for backend in [Box::new(GixBackend) as Box<dyn GitQuery>, Box::new(shell())] {
        assert_eq!(
            backend.remote_names(temp.path()).expect("remotes"),
            vec!["origin".to_string(), "upstream".to_string()]
        );
        let reported = backend.git_dir(temp.path()).expect("git dir");
        assert_eq!(
            reported.canonicalize().expect("canonical git dir"),
            git_dir,
            "{}",
            backend.name()
        );
    }
}

#[test]
fn test_query_backend_selection() {
    let shell = shell();
    assert_eq!(query_backend(BackendKind::Gix, &shell).name(), "gix");
    assert_eq!(query_backend(BackendKind::Shell, &shell).name(), "shell");
}

#[test]
fn test_shell_git_surfaces_stderr() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());
    let err = shell()
        .git(&["checkout", "-q", "no-such-branch"], temp.path())
        .expect_err("unknown branch");
    assert!(err.is_operation_failed());
    assert!(err.to_string().contains("no-such-branch"), "got: {err}");
}
