// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch and tag commands.

use crate::cli::refs::{BranchArgs, BranchSubcommand, CheckoutArgs, TagArgs, TagSubcommand};
use crate::error::Result;
use crate::git::Repository;

/// List local branches, marking the current one.
///
/// # Errors
///
/// Returns an error if references cannot be listed.
pub fn run_branches_command(repo: &Repository) -> Result<()> {
    // detached HEAD just means no marker
    let current = repo.current_branch().ok();
    for branch in repo.branches()? {
        let marker = if current.as_deref() == Some(branch.as_str()) {
            '*'
        } else {
            ' '
        };
        println!("{marker} {branch}");
    }
    Ok(())
}

/// Handler for the `branch` command.
///
/// # Errors
///
/// Returns an error if git rejects the branch operation.
pub fn run_branch_command(repo: &Repository, args: &BranchArgs) -> Result<()> {
    match &args.subcommand {
        BranchSubcommand::Create { name, start_point } => {
            repo.create_branch(name, start_point.as_deref())?;
        }
        BranchSubcommand::Rename { old, new } => repo.rename_branch(old, new)?,
        BranchSubcommand::Delete { name, force } => repo.delete_branch(name, *force)?,
    }
    Ok(())
}

/// Switch branches.
///
/// # Errors
///
/// Returns an error if the checkout fails.
pub fn run_checkout_command(repo: &Repository, args: &CheckoutArgs) -> Result<()> {
    repo.checkout(&args.branch)?;
    Ok(())
}

/// Handler for the `tag` command.
///
/// # Errors
///
/// Returns an error if git rejects the tag operation.
pub fn run_tag_command(repo: &Repository, args: &TagArgs) -> Result<()> {
    match &args.subcommand {
        TagSubcommand::Create { name, message } => repo.create_tag(name, message.as_deref())?,
        TagSubcommand::Delete { name } => repo.delete_tag(name)?,
        TagSubcommand::Checkout { name } => repo.checkout_tag(name)?,
    }
    Ok(())
}
