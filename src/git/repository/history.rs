// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit history views: log, push review, search, reflog.
//!
//! Every commit list is rendered one line per commit:
//!
//! ```text
//! <7 hex> <summary>
//! ```

use std::fs;
use std::io::ErrorKind;

use tracing::debug;

use super::Repository;
use crate::error::DeskResult;

const LOG_FORMAT: &str = "--format=%H %s";
const SHORT_HASH: usize = 7;

/// Render `"<full hash> <summary>"` lines as `"<7 hex> <summary>"`.
pub(super) fn commit_lines(output: &str) -> String {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (hash, summary) = line.split_once(' ').unwrap_or((line, ""));
            let short = hash.get(..SHORT_HASH).unwrap_or(hash);
            format!("{short} {summary}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Repository {
    /// Up to `max_count` commits from HEAD, most recent first.
    ///
    /// A freshly initialised repository has an unborn HEAD; git exits with
    /// 128 there instead of printing an empty history.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if HEAD has no commits yet.
    pub fn log(&self, max_count: usize) -> DeskResult<String> {
        let count = format!("--max-count={max_count}");
        let output = self.git(&["log", LOG_FORMAT, &count, "--"])?;
        Ok(commit_lines(&output))
    }

    /// [`Repository::log`] bounded by the configured `log_limit`.
    ///
    /// # Errors
    ///
    /// See [`Repository::log`].
    pub fn log_default(&self) -> DeskResult<String> {
        self.log(self.config.log_limit)
    }

    /// Commits on HEAD not yet on `remote/branch`; empty when nothing to push.
    ///
    /// `remote` falls back to the configured default and `branch` to the
    /// current branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` if no branch is given and HEAD is
    /// detached, or `GitError::OperationFailed` if the remote branch is unknown.
    pub fn push_review(&self, remote: Option<&str>, branch: Option<&str>) -> DeskResult<String> {
        let remote = self.remote_or_default(remote);
        let branch = match branch {
            Some(branch) => branch.to_string(),
            None => self.current_branch()?,
        };
        let range = format!("{remote}/{branch}..HEAD");
        debug!(range = %range, "reviewing unpushed commits");
        let output = self.git(&["log", LOG_FORMAT, &range, "--"])?;
        Ok(commit_lines(&output))
    }

    /// Commits whose message matches `pattern`, optionally by `author`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the log query fails.
    pub fn search_commits(&self, pattern: &str, author: Option<&str>) -> DeskResult<String> {
        let grep = format!("--grep={pattern}");
        let mut args = vec!["log", LOG_FORMAT, grep.as_str()];
        let author = author.map(|a| format!("--author={a}"));
        args.extend(author.as_deref());
        args.push("--");
        let output = self.git(&args)?;
        Ok(commit_lines(&output))
    }

    /// Raw HEAD reference log; empty when none has been written.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log exists but cannot be read.
    pub fn reflog(&self) -> DeskResult<String> {
        let path = self.query.git_dir(&self.root)?.join("logs").join("HEAD");
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

