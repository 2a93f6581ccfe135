// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution.
//!
//! ```text
//! CommandExecutor::run(args, cwd)
//!        |
//!        v
//!     GitCli
//!     which(program) once, -c options prepended,
//!     GIT_TERMINAL_PROMPT=0, GCM_INTERACTIVE=never
//!        |
//!        v
//!   CommandOutput { exit_code, stdout, stderr }   (never trimmed)
//! ```
//!
//! A non-zero exit is returned as data. Only a failure to start the
//! process is an error; callers decide what a non-zero exit means.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

use crate::error::{DeskResult, GitError};

/// Output of one finished git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Process exit code; `-1` when the process was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub fn into_stdout(self) -> String {
        self.stdout
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs version-control commands in a working directory.
pub trait CommandExecutor: Send + Sync {
    /// Run the tool with `args` inside `cwd`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` only if the process could not be started.
    fn run(&self, args: &[&str], cwd: &Path) -> DeskResult<CommandOutput>;

    /// Human-readable command line for `args`, used in logs and errors.
    fn describe(&self, args: &[&str]) -> String {
        format!("git {}", args.join(" "))
    }
}

/// Executor backed by the git command-line client.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    options: Vec<String>,
}

impl GitCli {
    /// Resolve `program` through `PATH` (or use it as-is when it is a path).
    ///
    /// # Errors
    ///
    /// Returns `GitError::ExecutableNotFound` if the program cannot be found.
    pub fn new(program: &str) -> DeskResult<Self> {
        let resolved = which::which(program).map_err(|_| GitError::ExecutableNotFound {
            name: program.to_string(),
        })?;
        trace!(program, path = %resolved.display(), "resolved git executable");
        Ok(Self {
            program: resolved,
            options: Vec::new(),
        })
    }

    /// Extra `key=value` config pairs passed as `-c key=value` before every command.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = String>) -> Self {
        self.options.extend(options);
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn full_args<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = Vec::with_capacity(self.options.len() * 2 + args.len());
        for option in &self.options {
            full.push("-c");
            full.push(option.as_str());
        }
        full.extend_from_slice(args);
        full
    }
}

impl CommandExecutor for GitCli {
    fn run(&self, args: &[&str], cwd: &Path) -> DeskResult<CommandOutput> {
        let full = self.full_args(args);
        let command_line = self.describe(&full);
        debug!(cmd = %command_line, cwd = %cwd.display(), "exec");

        let output = Command::new(&self.program)
            .args(&full)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| GitError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        trace!(cmd = %command_line, exit_code, "completed");

        Ok(CommandOutput::new(
            exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests;
