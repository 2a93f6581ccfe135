// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operation facade bound to one working tree.
//!
//! ```text
//!                     Repository { root }
//!                    /        |          \
//!   query: dyn GitQuery   shell: ShellBackend   IgnoreFile
//!   status/branches/      stage/commit/diff/    append + stage
//!   current_branch        branch/tag/submodule
//! ```
//!
//! The handle holds nothing but the root and its backends. Every call goes
//! back to git, so out-of-band changes are always visible.

mod branch;
mod history;
mod submodule;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::GitConfig;
use crate::error::{DeskResult, GitError};
use crate::git::backend::{GitQuery, ShellBackend, query_backend};
use crate::git::ignore::IgnoreFile;
use crate::git::status::{FileStatus, filter_by_prefix};

/// A validated, non-bare working tree.
pub struct Repository {
    root: PathBuf,
    query: Box<dyn GitQuery>,
    shell: ShellBackend,
    config: GitConfig,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("root", &self.root)
            .field("backend", &self.query.name())
            .finish_non_exhaustive()
    }
}

/// Path as UTF-8 text for the git command line.
pub(crate) fn path_arg(path: &Path) -> DeskResult<&str> {
    path.to_str().ok_or_else(|| {
        GitError::InvalidPath {
            path: path.display().to_string(),
        }
        .into()
    })
}

impl Repository {
    /// Bind to the working tree rooted at `path` using default settings.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if `path` is not the root of a
    /// non-bare working tree, or `GitError::ExecutableNotFound` if git is
    /// not installed.
    pub fn open(path: impl AsRef<Path>) -> DeskResult<Self> {
        Self::open_with(path, &GitConfig::default())
    }

    /// Bind to `path` with the given git settings.
    ///
    /// # Errors
    ///
    /// See [`Repository::open`].
    pub fn open_with(path: impl AsRef<Path>, config: &GitConfig) -> DeskResult<Self> {
        let shell = ShellBackend::from_config(config)?;
        let query = query_backend(config.backend, &shell);
        Self::bind(path.as_ref(), query, shell, config.clone())
    }

    /// Bind to `path` with explicit backends and default settings.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if `query` rejects `path`.
    pub fn with_backends(
        path: impl AsRef<Path>,
        query: Box<dyn GitQuery>,
        shell: ShellBackend,
    ) -> DeskResult<Self> {
        Self::bind(path.as_ref(), query, shell, GitConfig::default())
    }

    fn bind(
        path: &Path,
        query: Box<dyn GitQuery>,
        shell: ShellBackend,
        config: GitConfig,
    ) -> DeskResult<Self> {
        let root = query.work_tree(path)?;
        debug!(root = %root.display(), backend = query.name(), "repository opened");
        Ok(Self {
            root,
            query,
            shell,
            config,
        })
    }

    /// Create (if needed) and initialize a new working tree at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or `git init` fails.
    pub fn init(path: impl AsRef<Path>) -> DeskResult<Self> {
        Self::init_with(path, &GitConfig::default())
    }

    /// [`Repository::init`] with explicit settings.
    ///
    /// # Errors
    ///
    /// See [`Repository::init`].
    pub fn init_with(path: impl AsRef<Path>, config: &GitConfig) -> DeskResult<Self> {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        let shell = ShellBackend::from_config(config)?;
        shell.git(&["init", "--quiet"], path)?;
        info!(path = %path.display(), "repository initialized");
        let query = query_backend(config.backend, &shell);
        Self::bind(path, query, shell, config.clone())
    }

    /// Clone `url` into `path` and bind to the result.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the clone fails.
    pub fn clone(url: &str, path: impl AsRef<Path>) -> DeskResult<Self> {
        Self::clone_with(url, path, &GitConfig::default())
    }

    /// [`Repository::clone`] with explicit settings.
    ///
    /// # Errors
    ///
    /// See [`Repository::clone`].
    pub fn clone_with(url: &str, path: impl AsRef<Path>, config: &GitConfig) -> DeskResult<Self> {
        let dest = std::path::absolute(path.as_ref())?;
        let parent = dest.parent().unwrap_or_else(|| Path::new("/"));
        fs::create_dir_all(parent)?;
        let shell = ShellBackend::from_config(config)?;
        shell.git(&["clone", "--quiet", "--", url, path_arg(&dest)?], parent)?;
        info!(url, dest = %dest.display(), "repository cloned");
        let query = query_backend(config.backend, &shell);
        Self::bind(&dest, query, shell, config.clone())
    }

    /// Canonical working-tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings this handle was opened with.
    #[must_use]
    pub const fn config(&self) -> &GitConfig {
        &self.config
    }

    fn git(&self, args: &[&str]) -> DeskResult<String> {
        self.shell.git(args, &self.root)
    }

    fn remote_or_default<'a>(&'a self, remote: Option<&'a str>) -> &'a str {
        remote.unwrap_or(&self.config.default_remote)
    }

    /// Unified per-path status; untracked entries come last.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status cannot be read.
    pub fn status(&self) -> DeskResult<Vec<FileStatus>> {
        self.query.status(&self.root)
    }

    /// Status entries whose path starts with `prefix`.
    ///
    /// # Errors
    ///
    /// See [`Repository::status`].
    pub fn filter_statuses(&self, prefix: &str) -> DeskResult<Vec<FileStatus>> {
        Ok(filter_by_prefix(self.status()?, prefix))
    }

    /// Add paths to the index. Empty input is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if `git add` fails.
    pub fn stage<S: AsRef<str>>(&self, paths: &[S]) -> DeskResult<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(AsRef::as_ref));
        self.git(&args)?;
        info!(count = paths.len(), "paths staged");
        Ok(())
    }

    /// Reset index entries to HEAD, leaving the worktree alone. Empty input is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if `git reset` fails.
    pub fn unstage<S: AsRef<str>>(&self, paths: &[S]) -> DeskResult<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["reset", "--quiet", "--"];
        args.extend(paths.iter().map(AsRef::as_ref));
        self.git(&args)?;
        info!(count = paths.len(), "paths unstaged");
        Ok(())
    }

    /// Commit the current index with exactly `message`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if nothing is staged or the commit fails.
    pub fn commit(&self, message: &str) -> DeskResult<()> {
        self.git(&["commit", "--quiet", "--cleanup=verbatim", "-m", message])?;
        info!("commit created");
        Ok(())
    }

    /// Raw unified diff for one path, worktree vs index or (`cached`) index vs HEAD.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if `git diff` fails.
    pub fn diff(&self, path: &str, cached: bool) -> DeskResult<String> {
        let mut args = vec!["-c", "color.ui=false", "diff", "--no-ext-diff"];
        if cached {
            args.push("--cached");
        }
        args.extend(["--", path]);
        self.git(&args)
    }

    /// Append patterns to the ignore file and stage it. Empty input is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the ignore file cannot be written, or
    /// `GitError::OperationFailed` if staging it fails.
    pub fn ignore<S: AsRef<str>>(&self, patterns: &[S]) -> DeskResult<()> {
        if patterns.is_empty() {
            return Ok(());
        }
        let relative = path_arg(&self.config.ignore_file)?;
        let file = IgnoreFile::new(self.root.join(relative));
        let added = file.append_missing(patterns)?;
        info!(file = relative, added = ?added, "ignore list updated");
        // forced: the new patterns may match the ignore file itself
        self.git(&["add", "-f", "--", relative])?;
        Ok(())
    }

    /// Configured remote names, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the configuration cannot be read.
    pub fn remote_names(&self) -> DeskResult<Vec<String>> {
        self.query.remote_names(&self.root)
    }

    /// Add a remote unless one with that name already exists.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if `git remote add` fails.
    pub fn add_remote(&self, name: &str, url: &str) -> DeskResult<()> {
        if self.remote_names()?.iter().any(|remote| remote == name) {
            debug!(remote = name, "remote already exists");
            return Ok(());
        }
        self.git(&["remote", "add", "--", name, url])?;
        info!(remote = name, url, "remote added");
        Ok(())
    }

    /// Write the local commit identity.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if `git config` fails.
    pub fn configure_user(&self, name: &str, email: &str) -> DeskResult<()> {
        self.git(&["config", "--local", "user.name", name])?;
        self.git(&["config", "--local", "user.email", email])?;
        info!(name, email, "user identity configured");
        Ok(())
    }

    /// Pull from `remote` (default remote when `None`), optionally a specific branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the pull fails. Never retried.
    pub fn pull(&self, remote: Option<&str>, branch: Option<&str>) -> DeskResult<()> {
        let remote = self.remote_or_default(remote);
        let mut args = vec!["pull", "--quiet", remote];
        args.extend(branch);
        self.git(&args)?;
        info!(remote, branch, "pulled");
        Ok(())
    }

    /// Push to `remote` (default remote when `None`), optionally a specific branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the push fails. Never retried.
    pub fn push(&self, remote: Option<&str>, branch: Option<&str>) -> DeskResult<()> {
        let remote = self.remote_or_default(remote);
        let mut args = vec!["push", "--quiet", remote];
        args.extend(branch);
        self.git(&args)?;
        info!(remote, branch, "pushed");
        Ok(())
    }
}
