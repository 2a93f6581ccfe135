// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure Rust query backend using gix.
//!
//! ```text
//! gix status platform
//!   TreeIndex(change)            -> record_index      (HEAD tree vs index)
//!   IndexWorktree::Modification  -> record_worktree   (index vs worktree)
//!   IndexWorktree::DirectoryContents(Untracked) -> record_untracked
//!   IndexWorktree::Rewrite       -> source deleted + destination untracked
//! ```

use gix::bstr::ByteSlice as _;
use gix::status::plumbing::index_as_worktree::{Change, EntryStatus};
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::error::{DeskResult, GitError, GixError};
use crate::git::status::{ChangeKind, FileStatus, StatusReconciler};

use super::GitQuery;

/// Pure Rust git backend using gix.
///
/// Reads `.git/` directly without spawning subprocesses.
pub struct GixBackend;

fn open(root: &Path) -> DeskResult<gix::Repository> {
    Ok(gix::open(root).map_err(|e| GixError::Open(Box::new(e)))?)
}

/// Map an index-vs-worktree entry status; `None` means no content change.
fn worktree_change<T, U>(status: &EntryStatus<T, U>) -> Option<ChangeKind> {
    match status {
        EntryStatus::NeedsUpdate(_) => None,
        EntryStatus::IntentToAdd => Some(ChangeKind::Added),
        EntryStatus::Change(Change::Removed) => Some(ChangeKind::Deleted),
        EntryStatus::Conflict { .. } | EntryStatus::Change(_) => Some(ChangeKind::Modified),
    }
}

impl GitQuery for GixBackend {
    fn name(&self) -> &'static str {
        "gix"
    }

    fn work_tree(&self, path: &Path) -> DeskResult<PathBuf> {
        let not_a_repository = || GitError::NotARepository {
            path: path.display().to_string(),
        };
        let canonical = path.canonicalize().map_err(|_| not_a_repository())?;
        let repo = gix::open(&canonical).map_err(|_| not_a_repository())?;
        let workdir = repo.workdir().ok_or_else(not_a_repository)?;
        let workdir = workdir.canonicalize().map_err(|_| not_a_repository())?;
        if workdir != canonical {
            return Err(not_a_repository().into());
        }
        Ok(canonical)
    }

    fn status(&self, root: &Path) -> DeskResult<Vec<FileStatus>> {
        use gix::diff::index::ChangeRef;
        use gix::status::index_worktree::Item as WorktreeItem;

        let repo = open(root)?;
        let iter = repo
            .status(gix::progress::Discard)
            .map_err(|e| GixError::Status(e.to_string()))?
            .untracked_files(gix::status::UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|e| GixError::Status(e.to_string()))?;

        let mut staged = Vec::new();
        let mut unstaged = Vec::new();
        let mut untracked = Vec::new();

        for item in iter {
            let item = item.map_err(|e| GixError::Status(e.to_string()))?;
            match item {
                gix::status::Item::TreeIndex(change) => {
                    let (location, kind) = match &change {
                        ChangeRef::Addition { location, .. } => (location, ChangeKind::Added),
                        ChangeRef::Deletion { location, .. } => (location, ChangeKind::Deleted),
                        ChangeRef::Modification { location, .. } => {
                            (location, ChangeKind::Modified)
                        }
                        ChangeRef::Rewrite { location, copy, .. } => (
                            location,
                            if *copy {
                                ChangeKind::Modified
                            } else {
                                ChangeKind::Renamed
                            },
                        ),
                    };
                    staged.push((location.to_str_lossy().into_owned(), kind));
                }
                gix::status::Item::IndexWorktree(item) => match item {
                    WorktreeItem::Modification {
                        rela_path, status, ..
                    } => {
                        if let Some(kind) = worktree_change(&status) {
                            unstaged.push((rela_path.to_str_lossy().into_owned(), kind));
                        }
                    }
                    WorktreeItem::DirectoryContents { entry, .. } => {
                        if matches!(entry.status, gix::dir::entry::Status::Untracked) {
                            untracked.push(entry.rela_path.to_str_lossy().into_owned());
                        }
                    }
                    WorktreeItem::Rewrite {
                        source,
                        dirwalk_entry,
                        copy,
                        ..
                    } => {
                        // git status reports worktree renames as a deletion plus
                        // an untracked file
                        if !copy {
                            unstaged.push((
                                source.rela_path().to_str_lossy().into_owned(),
                                ChangeKind::Deleted,
                            ));
                        }
                        untracked.push(dirwalk_entry.rela_path.to_str_lossy().into_owned());
                    }
                },
            }
        }

        // gix yields items from parallel walks; sort for stable output
        staged.sort_by(|a, b| a.0.cmp(&b.0));
        unstaged.sort_by(|a, b| a.0.cmp(&b.0));
        untracked.sort();
        trace!(
            staged = staged.len(),
            unstaged = unstaged.len(),
            untracked = untracked.len(),
            "gix status collected"
        );

        let mut reconciler = StatusReconciler::new();
        for (path, kind) in staged {
            reconciler.record_index(path, kind);
        }
        for (path, kind) in unstaged {
            reconciler.record_worktree(path, kind);
        }
        for path in untracked {
            reconciler.record_untracked(path);
        }
        Ok(reconciler.finish())
    }

    fn current_branch(&self, root: &Path) -> DeskResult<Option<String>> {
        let repo = open(root)?;
        let head = repo.head_name().map_err(GixError::Head)?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn branches(&self, root: &Path) -> DeskResult<Vec<String>> {
        let repo = open(root)?;
        let references = repo
            .references()
            .map_err(|e| GixError::References(e.to_string()))?;
        let mut branches = Vec::new();
        for reference in references
            .local_branches()
            .map_err(|e| GixError::References(e.to_string()))?
        {
            let reference = reference.map_err(|e| GixError::References(e.to_string()))?;
            branches.push(reference.name().shorten().to_str_lossy().into_owned());
        }
        branches.sort();
        Ok(branches)
    }

    fn remote_names(&self, root: &Path) -> DeskResult<Vec<String>> {
        let repo = open(root)?;
        let mut remotes: Vec<String> = repo
            .remote_names()
            .iter()
            .map(|name| name.to_str_lossy().into_owned())
            .collect();
        remotes.sort();
        Ok(remotes)
    }

    fn git_dir(&self, root: &Path) -> DeskResult<PathBuf> {
        let repo = open(root)?;
        Ok(repo.git_dir().to_path_buf())
    }
}
