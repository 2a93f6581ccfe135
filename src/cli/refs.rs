// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch and tag command arguments.
//!
//! ```text
//! branch create NAME [START] | rename OLD NEW | delete NAME [-f]
//! tag create NAME [-m MSG] | delete NAME | checkout NAME
//! checkout BRANCH
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `checkout` command.
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    /// Branch to switch to.
    #[arg(value_name = "BRANCH")]
    pub branch: String,
}

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Args)]
pub struct BranchArgs {
    #[command(subcommand)]
    pub subcommand: BranchSubcommand,
}

/// Branch subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BranchSubcommand {
    /// Creates a branch without switching to it.
    Create {
        /// New branch name.
        name: String,
        /// Commit to start from (defaults to HEAD).
        start_point: Option<String>,
    },

    /// Renames a branch.
    Rename {
        /// Current name.
        old: String,
        /// New name.
        new: String,
    },

    /// Deletes a branch.
    Delete {
        /// Branch to delete.
        name: String,
        /// Deletes even if the branch is not fully merged.
        #[arg(short = 'f', long)]
        force: bool,
    },
}

/// Arguments for the `tag` command.
#[derive(Debug, Clone, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    pub subcommand: TagSubcommand,
}

/// Tag subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TagSubcommand {
    /// Tags HEAD; annotated when a message is given.
    Create {
        /// Tag name.
        name: String,
        /// Annotation message.
        #[arg(short = 'm', long)]
        message: Option<String>,
    },

    /// Deletes a tag.
    Delete {
        /// Tag name.
        name: String,
    },

    /// Detaches HEAD at a tag.
    Checkout {
        /// Tag name.
        name: String,
    },
}
