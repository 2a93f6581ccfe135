// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> git::Repository
//!   config, worktree, history, refs, remote, submodule
//! ```

pub mod config;
pub mod history;
pub mod refs;
pub mod remote;
pub mod submodule;
pub mod worktree;

use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::git::Repository;

/// Open the working tree selected by `-C` with the loaded git settings.
///
/// # Errors
///
/// Returns an error if the path is not the root of a working tree.
pub fn open_repository(global: &GlobalOptions, config: &Config) -> Result<Repository> {
    Ok(Repository::open_with(global.repo_path(), &config.git)?)
}
