// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule commands.

use crate::cli::submodule::{SubmoduleArgs, SubmoduleSubcommand};
use crate::error::Result;
use crate::git::Repository;

/// Handler for the `submodule` command.
///
/// # Errors
///
/// Returns an error if any submodule step fails.
pub fn run_submodule_command(repo: &Repository, args: &SubmoduleArgs) -> Result<()> {
    match &args.subcommand {
        SubmoduleSubcommand::Add { url, path, name } => {
            repo.add_submodule(url, path, name.as_deref())?;
        }
        SubmoduleSubcommand::Update => repo.update_submodules()?,
        SubmoduleSubcommand::Sync => repo.sync_submodules()?,
        SubmoduleSubcommand::Remove { path } => repo.remove_submodule(path)?,
    }
    Ok(())
}
