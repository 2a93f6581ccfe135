// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitdesk using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitdesk [global options] <command>
//! status | stage | unstage | commit | diff | ignore
//! log | search | reflog
//! branches | branch {create|rename|delete} | checkout
//! tag {create|delete|checkout}
//! pull | push | push-review | remote {add|list} | config-user
//! init | clone
//! submodule {add|update|sync|remove}
//! options | config-files | version
//! ```

pub mod global;
pub mod refs;
pub mod remote;
pub mod submodule;
pub mod worktree;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::refs::{BranchArgs, CheckoutArgs, TagArgs};
use crate::cli::remote::{
    CloneArgs, ConfigUserArgs, InitArgs, PushReviewArgs, RemoteArgs, TransferArgs,
};
use crate::cli::submodule::SubmoduleArgs;
use crate::cli::worktree::{CommitArgs, DiffArgs, LogArgs, PathsArgs, SearchArgs, StatusArgs};
use clap::{Parser, Subcommand};

/// Git working-tree desk
///
/// Inspect and drive a git working tree from one place.
#[derive(Debug, Parser)]
#[command(
    name = "gitdesk",
    author,
    version,
    about = "Git working-tree desk",
    long_about = "gitdesk Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Status, staging, history, branches, tags, remotes and\n\
                  submodules for one git working tree. Use -C to pick the\n\
                  tree; see `gitdesk <command> --help` for details.",
    after_help = "CONFIG FILES:\n\n\
                  gitdesk reads `gitdesk.toml` from the current directory if it\n\
                  exists, then every file given with --config, in order. Values\n\
                  can be overridden with GITDESK_SECTION__KEY environment\n\
                  variables (e.g. GITDESK_GIT__BACKEND=shell) and finally by\n\
                  command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files that were loaded.
    #[command(name = "config-files")]
    ConfigFiles,

    /// Shows per-path status; untracked entries last.
    Status(StatusArgs),

    /// Adds paths to the index.
    Stage(PathsArgs),

    /// Resets paths in the index to HEAD.
    Unstage(PathsArgs),

    /// Commits the index.
    Commit(CommitArgs),

    /// Shows the diff of one path.
    Diff(DiffArgs),

    /// Appends patterns to the ignore file and stages it.
    Ignore(PathsArgs),

    /// Shows recent commits.
    Log(LogArgs),

    /// Searches commit messages.
    Search(SearchArgs),

    /// Prints the HEAD reference log.
    Reflog,

    /// Lists local branches.
    Branches,

    /// Manages branches.
    Branch(BranchArgs),

    /// Switches to a branch.
    Checkout(CheckoutArgs),

    /// Manages tags.
    Tag(TagArgs),

    /// Pulls from a remote.
    Pull(TransferArgs),

    /// Pushes to a remote.
    Push(TransferArgs),

    /// Lists local commits not yet on the remote branch.
    #[command(name = "push-review")]
    PushReview(PushReviewArgs),

    /// Manages remotes.
    Remote(RemoteArgs),

    /// Sets the local commit identity.
    #[command(name = "config-user")]
    ConfigUser(ConfigUserArgs),

    /// Creates a new working tree.
    Init(InitArgs),

    /// Clones a repository.
    Clone(CloneArgs),

    /// Manages submodules.
    Submodule(SubmoduleArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
