// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree commands: status, stage, unstage, commit, diff, ignore.

use crate::cli::worktree::{CommitArgs, DiffArgs, PathsArgs, StatusArgs};
use crate::error::Result;
use crate::git::{FileStatus, Repository};

/// Render status entries as `XY<tab>path` lines, or a JSON array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_status(statuses: &[FileStatus], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(statuses)?);
    }
    Ok(statuses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Print the status of the working tree.
///
/// # Errors
///
/// Returns an error if the status cannot be read.
pub fn run_status_command(repo: &Repository, args: &StatusArgs) -> Result<()> {
    let statuses = match &args.prefix {
        Some(prefix) => repo.filter_statuses(prefix)?,
        None => repo.status()?,
    };
    let rendered = format_status(&statuses, args.json)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Stage paths.
///
/// # Errors
///
/// Returns an error if `git add` fails.
pub fn run_stage_command(repo: &Repository, args: &PathsArgs) -> Result<()> {
    repo.stage(&args.paths)?;
    Ok(())
}

/// Unstage paths.
///
/// # Errors
///
/// Returns an error if `git reset` fails.
pub fn run_unstage_command(repo: &Repository, args: &PathsArgs) -> Result<()> {
    repo.unstage(&args.paths)?;
    Ok(())
}

/// Commit the index.
///
/// # Errors
///
/// Returns an error if nothing is staged or the commit fails.
pub fn run_commit_command(repo: &Repository, args: &CommitArgs) -> Result<()> {
    repo.commit(&args.message)?;
    Ok(())
}

/// Print the raw diff of one path.
///
/// # Errors
///
/// Returns an error if `git diff` fails.
pub fn run_diff_command(repo: &Repository, args: &DiffArgs) -> Result<()> {
    let diff = repo.diff(&args.path, args.cached)?;
    if diff.trim().is_empty() {
        println!("No changes");
    } else {
        print!("{diff}");
    }
    Ok(())
}

/// Add ignore patterns.
///
/// # Errors
///
/// Returns an error if the ignore file cannot be written or staged.
pub fn run_ignore_command(repo: &Repository, args: &PathsArgs) -> Result<()> {
    repo.ignore(&args.paths)?;
    Ok(())
}
