// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree and history command arguments.
//!
//! ```text
//! status [--json] [--prefix P]
//! stage PATH... | unstage PATH... | ignore PATTERN...
//! commit -m MESSAGE
//! diff [--cached] PATH
//! log [-n N] | search PATTERN [--author A] | reflog
//! ```

use clap::Args;

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Prints entries as a JSON array of `{path, status}` objects.
    #[arg(long)]
    pub json: bool,

    /// Only shows paths starting with this prefix.
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub prefix: Option<String>,
}

/// Repository-relative paths or patterns.
#[derive(Debug, Clone, Args)]
pub struct PathsArgs {
    /// Paths to act on.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message, stored verbatim.
    #[arg(short = 'm', long, required = true)]
    pub message: String,
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, Args)]
pub struct DiffArgs {
    /// Diffs the index against HEAD instead of the worktree against the index.
    #[arg(long, alias = "staged")]
    pub cached: bool,

    /// Path to diff.
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Maximum number of commits (defaults to git.log_limit).
    #[arg(short = 'n', long = "max-count", value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..))]
    pub max_count: Option<u64>,
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Message pattern (git --grep semantics).
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Only commits by this author.
    #[arg(short = 'a', long)]
    pub author: Option<String>,
}
