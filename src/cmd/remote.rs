// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote, identity and repository-creation commands.

use tracing::info;

use crate::cli::global::GlobalOptions;
use crate::cli::remote::{
    CloneArgs, ConfigUserArgs, InitArgs, PushReviewArgs, RemoteArgs, RemoteSubcommand,
    TransferArgs,
};
use crate::config::Config;
use crate::error::Result;
use crate::git::Repository;

/// Shown by `push-review` when the remote branch is up to date.
pub const NOTHING_TO_PUSH: &str = "Nothing to push";

/// Pull from a remote.
///
/// # Errors
///
/// Returns an error if the pull fails.
pub fn run_pull_command(repo: &Repository, args: &TransferArgs) -> Result<()> {
    repo.pull(args.remote.as_deref(), args.branch.as_deref())?;
    Ok(())
}

/// Push to a remote.
///
/// # Errors
///
/// Returns an error if the push fails.
pub fn run_push_command(repo: &Repository, args: &TransferArgs) -> Result<()> {
    repo.push(args.remote.as_deref(), args.branch.as_deref())?;
    Ok(())
}

/// Print the commits a push would send.
///
/// # Errors
///
/// Returns an error if HEAD is detached without `--branch`, or the
/// remote branch is unknown.
pub fn run_push_review_command(repo: &Repository, args: &PushReviewArgs) -> Result<()> {
    let review = repo.push_review(args.remote.as_deref(), args.branch.as_deref())?;
    if review.is_empty() {
        println!("{NOTHING_TO_PUSH}");
    } else {
        println!("{review}");
    }
    Ok(())
}

/// Handler for the `remote` command.
///
/// # Errors
///
/// Returns an error if the remote cannot be added or listed.
pub fn run_remote_command(repo: &Repository, args: &RemoteArgs) -> Result<()> {
    match &args.subcommand {
        RemoteSubcommand::Add { name, url } => repo.add_remote(name, url)?,
        RemoteSubcommand::List => {
            for remote in repo.remote_names()? {
                println!("{remote}");
            }
        }
    }
    Ok(())
}

/// Set the local commit identity.
///
/// # Errors
///
/// Returns an error if `git config` fails.
pub fn run_config_user_command(repo: &Repository, args: &ConfigUserArgs) -> Result<()> {
    repo.configure_user(&args.name, &args.email)?;
    Ok(())
}

/// Initialize a new working tree.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or `git init` fails.
pub fn run_init_command(global: &GlobalOptions, config: &Config, args: &InitArgs) -> Result<()> {
    let path = args.path.clone().unwrap_or_else(|| global.repo_path());
    let repo = Repository::init_with(&path, &config.git)?;
    info!(root = %repo.root().display(), "initialized");
    println!("{}", repo.root().display());
    Ok(())
}

/// Clone a repository.
///
/// # Errors
///
/// Returns an error if the clone fails.
pub fn run_clone_command(config: &Config, args: &CloneArgs) -> Result<()> {
    let repo = Repository::clone_with(&args.url, &args.path, &config.git)?;
    println!("{}", repo.root().display());
    Ok(())
}
