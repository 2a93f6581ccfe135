// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git working-tree core.
//!
//! ```text
//!            repository::Repository
//!         (facade bound to one root)
//!           /          |          \
//!          v           v           v
//!   backend::GitQuery  ignore   backend::ShellBackend
//!     gix | shell    IgnoreFile    (all mutations)
//!          |                           |
//!          v                           v
//!   status::StatusReconciler     exec::CommandExecutor
//!   (one record per path)          GitCli -> git
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for porcelain queries and every write.

pub mod backend;
pub mod exec;
pub mod ignore;
pub mod repository;
pub mod status;

pub use repository::Repository;
pub use status::{ChangeKind, FileState, FileStatus};

#[cfg(test)]
mod test_support;
