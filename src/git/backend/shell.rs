// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-based git backend using the git CLI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::types::GitConfig;
use crate::error::{DeskResult, GitError};
use crate::git::exec::{CommandExecutor, CommandOutput, GitCli};
use crate::git::status::{FileStatus, porcelain};

use super::GitQuery;

/// Shell-based git backend.
///
/// Used for every mutation, and optionally for queries (porcelain strategy).
#[derive(Clone)]
pub struct ShellBackend {
    executor: Arc<dyn CommandExecutor>,
}

impl ShellBackend {
    #[must_use]
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Backend over the configured git executable and `-c` options.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ExecutableNotFound` if the program cannot be resolved.
    pub fn from_config(config: &GitConfig) -> DeskResult<Self> {
        let cli = GitCli::new(&config.program)?.with_options(config.options.iter().cloned());
        Ok(Self::new(Arc::new(cli)))
    }

    /// Run git and return its output whatever the exit code.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` only if git could not be started.
    pub fn run(&self, args: &[&str], cwd: &Path) -> DeskResult<CommandOutput> {
        self.executor.run(args, cwd)
    }

    /// Run git and return its untrimmed stdout, treating a non-zero exit as failure.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` carrying stderr (or stdout when
    /// stderr is empty) if git exits non-zero.
    pub fn git(&self, args: &[&str], cwd: &Path) -> DeskResult<String> {
        let output = self.run(args, cwd)?;
        if output.success() {
            return Ok(output.into_stdout());
        }
        Err(self.failure(args, &output).into())
    }

    /// Build the `OperationFailed` error for a finished invocation.
    #[must_use]
    pub fn failure(&self, args: &[&str], output: &CommandOutput) -> GitError {
        let message = if output.stderr().trim().is_empty() {
            output.stdout()
        } else {
            output.stderr()
        };
        GitError::OperationFailed {
            command: self.executor.describe(args),
            exit_code: output.exit_code(),
            stderr: message.trim().to_string(),
        }
    }
}

fn not_a_repository(path: &Path) -> GitError {
    GitError::NotARepository {
        path: path.display().to_string(),
    }
}

impl GitQuery for ShellBackend {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn work_tree(&self, path: &Path) -> DeskResult<PathBuf> {
        let canonical = path.canonicalize().map_err(|_| not_a_repository(path))?;
        let output = self.run(&["rev-parse", "--show-toplevel"], &canonical)?;
        if !output.success() {
            return Err(not_a_repository(path).into());
        }
        let toplevel = Path::new(output.stdout().trim())
            .canonicalize()
            .map_err(|_| not_a_repository(path))?;
        // a subdirectory of some other working tree is not a root
        if toplevel != canonical {
            return Err(not_a_repository(path).into());
        }
        Ok(canonical)
    }

    fn status(&self, root: &Path) -> DeskResult<Vec<FileStatus>> {
        let output = self.git(
            &[
                "-c",
                "core.quotePath=false",
                "status",
                "--porcelain=v1",
                "--untracked-files=all",
            ],
            root,
        )?;
        porcelain::parse(&output)
    }

    fn current_branch(&self, root: &Path) -> DeskResult<Option<String>> {
        let args = ["symbolic-ref", "--quiet", "--short", "HEAD"];
        let output = self.run(&args, root)?;
        match output.exit_code() {
            0 => Ok(Some(output.stdout().trim().to_string())),
            // --quiet: exit 1 without message when HEAD is not symbolic
            1 => Ok(None),
            _ => Err(self.failure(&args, &output).into()),
        }
    }

    fn branches(&self, root: &Path) -> DeskResult<Vec<String>> {
        let output = self.git(&["for-each-ref", "--format=%(refname)", "refs/heads/"], root)?;
        let mut branches: Vec<String> = output
            .lines()
            .filter_map(|line| line.strip_prefix("refs/heads/"))
            .map(str::to_string)
            .collect();
        branches.sort();
        Ok(branches)
    }

    fn remote_names(&self, root: &Path) -> DeskResult<Vec<String>> {
        let output = self.git(&["remote"], root)?;
        let mut remotes: Vec<String> = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        remotes.sort();
        Ok(remotes)
    }

    fn git_dir(&self, root: &Path) -> DeskResult<PathBuf> {
        let output = self.git(&["rev-parse", "--absolute-git-dir"], root)?;
        Ok(PathBuf::from(output.trim()))
    }
}
