// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule command arguments.

use clap::{Args, Subcommand};

/// Arguments for the `submodule` command.
#[derive(Debug, Clone, Args)]
pub struct SubmoduleArgs {
    #[command(subcommand)]
    pub subcommand: SubmoduleSubcommand,
}

/// Submodule subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SubmoduleSubcommand {
    /// Adds a submodule.
    Add {
        /// Submodule repository URL.
        url: String,
        /// Checkout path inside this working tree.
        path: String,
        /// Logical submodule name (defaults to the path).
        #[arg(long)]
        name: Option<String>,
    },

    /// Initializes and updates all submodules recursively.
    Update,

    /// Re-syncs submodule URLs, then updates.
    Sync,

    /// Deinitializes and removes a submodule.
    Remove {
        /// Submodule path.
        path: String,
    },
}
