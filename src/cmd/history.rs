// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! History commands: log, search, reflog.

use crate::cli::worktree::{LogArgs, SearchArgs};
use crate::error::Result;
use crate::git::Repository;

fn print_lines(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Print recent commits.
///
/// # Errors
///
/// Returns an error if HEAD has no commits or the log query fails.
pub fn run_log_command(repo: &Repository, args: &LogArgs) -> Result<()> {
    let log = match args.max_count {
        Some(count) => repo.log(usize::try_from(count)?)?,
        None => repo.log_default()?,
    };
    print_lines(&log);
    Ok(())
}

/// Print commits matching a message pattern.
///
/// # Errors
///
/// Returns an error if the log query fails.
pub fn run_search_command(repo: &Repository, args: &SearchArgs) -> Result<()> {
    let found = repo.search_commits(&args.pattern, args.author.as_deref())?;
    print_lines(&found);
    Ok(())
}

/// Print the HEAD reference log.
///
/// # Errors
///
/// Returns an error if the reflog cannot be read.
pub fn run_reflog_command(repo: &Repository) -> Result<()> {
    print!("{}", repo.reflog()?);
    Ok(())
}
