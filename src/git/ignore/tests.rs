// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use super::IgnoreFile;
use crate::git::test_support::temp_dir;

#[test]
fn test_missing_file_is_empty() {
    let temp = temp_dir();
    let ignore = IgnoreFile::new(temp.path().join(".gitignore"));
    assert!(ignore.entries().expect("entries").is_empty());
}

#[test]
fn test_append_creates_file() {
    let temp = temp_dir();
    let path = temp.path().join(".gitignore");
    let ignore = IgnoreFile::new(&path);

    let added = ignore
        .append_missing(&["target/", "*.log"])
        .expect("append");
    assert_eq!(added, vec!["target/", "*.log"]);
    assert_eq!(fs::read_to_string(&path).expect("read"), "target/\n*.log\n");
}

#[test]
fn test_append_is_idempotent() {
    let temp = temp_dir();
    let path = temp.path().join(".gitignore");
    let ignore = IgnoreFile::new(&path);

    ignore.append_missing(&["build/"]).expect("first");
    let added = ignore.append_missing(&["build/"]).expect("second");
    assert!(added.is_empty());
    assert_eq!(fs::read_to_string(&path).expect("read"), "build/\n");
}

#[test]
fn test_append_preserves_existing_lines() {
    let temp = temp_dir();
    let path = temp.path().join(".gitignore");
    fs::write(&path, "# comment\n\n  *.tmp\nlast-line").expect("seed");
    let ignore = IgnoreFile::new(&path);

    let added = ignore
        .append_missing(&["*.tmp", "out/", "out/", "", "last-line"])
        .expect("append");
    assert_eq!(added, vec!["out/"]);
    insta::assert_snapshot!(fs::read_to_string(&path).expect("read"), @r"
    # comment

      *.tmp
    last-line
    out/
    ");
}
