// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)  --> GixBackend   (pure Rust gix, structured objects)
//!                  --> ShellBackend (git CLI, porcelain text)
//! mutations        --> ShellBackend::git (non-zero exit = OperationFailed)
//! ```
//!
//! Both query backends must report the same `(path, status)` pairs for a
//! given working tree; the facade never knows which one it talks to.

mod gix_backend;
mod shell;

pub use gix_backend::GixBackend;
pub use shell::ShellBackend;

use std::path::{Path, PathBuf};

use crate::config::types::BackendKind;
use crate::error::DeskResult;
use crate::git::status::FileStatus;

/// Read-only git query operations.
///
/// Implementors are stateless: every call re-reads the repository so
/// out-of-band changes are always visible.
pub trait GitQuery: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Validate that `path` is the root of a non-bare working tree and
    /// return its canonical form.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` otherwise.
    fn work_tree(&self, path: &Path) -> DeskResult<PathBuf>;

    /// Unified per-path status.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be read.
    fn status(&self, root: &Path) -> DeskResult<Vec<FileStatus>>;

    /// Current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if HEAD cannot be read.
    fn current_branch(&self, root: &Path) -> DeskResult<Option<String>>;

    /// Local branch names, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if references cannot be listed.
    fn branches(&self, root: &Path) -> DeskResult<Vec<String>>;

    /// Configured remote names, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the configuration cannot be read.
    fn remote_names(&self, root: &Path) -> DeskResult<Vec<String>>;

    /// Absolute path of the repository's git directory.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository cannot be opened.
    fn git_dir(&self, root: &Path) -> DeskResult<PathBuf>;
}

/// Build the query backend selected by `kind`.
#[must_use]
pub fn query_backend(kind: BackendKind, shell: &ShellBackend) -> Box<dyn GitQuery> {
    match kind {
        BackendKind::Gix => Box::new(GixBackend),
        BackendKind::Shell => Box::new(shell.clone()),
    }
}

#[cfg(test)]
mod tests;
