// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote, identity and repository-creation command arguments.
//!
//! ```text
//! pull [REMOTE] [BRANCH] | push [REMOTE] [BRANCH]
//! push-review [--remote R] [--branch B]
//! remote add NAME URL | remote list
//! config-user NAME EMAIL
//! init [PATH] | clone URL PATH
//! ```

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for `pull` and `push`.
#[derive(Debug, Clone, Default, Args)]
pub struct TransferArgs {
    /// Remote name (defaults to git.default_remote).
    pub remote: Option<String>,

    /// Branch (defaults to the tracking configuration).
    pub branch: Option<String>,
}

/// Arguments for the `push-review` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PushReviewArgs {
    /// Remote name (defaults to git.default_remote).
    #[arg(short = 'r', long)]
    pub remote: Option<String>,

    /// Remote branch (defaults to the current branch).
    #[arg(short = 'b', long)]
    pub branch: Option<String>,
}

/// Arguments for the `remote` command.
#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    pub subcommand: RemoteSubcommand,
}

/// Remote subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RemoteSubcommand {
    /// Adds a remote unless one with that name exists.
    Add {
        /// Remote name.
        name: String,
        /// Remote URL.
        url: String,
    },

    /// Lists remote names.
    List,
}

/// Arguments for the `config-user` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigUserArgs {
    /// Commit author name.
    pub name: String,

    /// Commit author email.
    pub email: String,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to -C or the current directory).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Arguments for the `clone` command.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Repository URL.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Destination directory.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
