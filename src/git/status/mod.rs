// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unified per-path status model.
//!
//! ```text
//!  index vs HEAD ----> record_index(path, kind)      slot X
//!  worktree vs index -> record_worktree(path, kind)  slot Y (merges into X's record)
//!  untracked --------> record_untracked(path)        "??" (appended last)
//!                               |
//!                               v
//!                  StatusReconciler::finish()
//!                               |
//!                               v
//!                 Vec<FileStatus>  one record per path
//! ```
//!
//! Both access strategies (gix objects and porcelain text) feed the same
//! reconciler, so merge rules live in one place.

pub mod porcelain;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Kind of change in one status slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl ChangeKind {
    /// Single-character status code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Modified => 'M',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
        }
    }
}

/// Slot character for an optional change (`' '` when unchanged).
const fn slot_code(slot: Option<ChangeKind>) -> char {
    match slot {
        Some(kind) => kind.code(),
        None => ' ',
    }
}

/// State of one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileState {
    /// Known to the index; at least one slot is set.
    Tracked {
        /// Index vs HEAD.
        index: Option<ChangeKind>,
        /// Worktree vs index.
        worktree: Option<ChangeKind>,
    },
    /// Present in the worktree, never added.
    Untracked,
}

/// Status of one repository-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileStatus {
    path: String,
    state: FileState,
}

impl FileStatus {
    #[must_use]
    pub fn tracked(
        path: impl Into<String>,
        index: Option<ChangeKind>,
        worktree: Option<ChangeKind>,
    ) -> Self {
        Self {
            path: path.into(),
            state: FileState::Tracked { index, worktree },
        }
    }

    #[must_use]
    pub fn untracked(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: FileState::Untracked,
        }
    }

    /// Repository-relative path, `/`-separated.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn state(&self) -> FileState {
        self.state
    }

    /// Index-vs-HEAD change, if any.
    #[must_use]
    pub const fn index(&self) -> Option<ChangeKind> {
        match self.state {
            FileState::Tracked { index, .. } => index,
            FileState::Untracked => None,
        }
    }

    /// Worktree-vs-index change, if any.
    #[must_use]
    pub const fn worktree(&self) -> Option<ChangeKind> {
        match self.state {
            FileState::Tracked { worktree, .. } => worktree,
            FileState::Untracked => None,
        }
    }

    #[must_use]
    pub const fn is_untracked(&self) -> bool {
        matches!(self.state, FileState::Untracked)
    }

    /// Two-character status code: `"??"` or index slot followed by worktree slot.
    #[must_use]
    pub fn code(&self) -> String {
        match self.state {
            FileState::Untracked => "??".to_string(),
            FileState::Tracked { index, worktree } => {
                [slot_code(index), slot_code(worktree)].iter().collect()
            }
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.code(), self.path)
    }
}

impl Serialize for FileStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("FileStatus", 2)?;
        record.serialize_field("path", &self.path)?;
        record.serialize_field("status", &self.code())?;
        record.end()
    }
}

/// Merges index, worktree and untracked reports into one record per path.
#[derive(Debug, Default)]
pub struct StatusReconciler {
    tracked: Vec<(String, Option<ChangeKind>, Option<ChangeKind>)>,
    positions: HashMap<String, usize>,
    untracked: Vec<String>,
    untracked_seen: HashSet<String>,
}

impl StatusReconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an index-vs-HEAD change in the first slot.
    pub fn record_index(&mut self, path: impl Into<String>, kind: ChangeKind) {
        let path = path.into();
        if let Some(&pos) = self.positions.get(&path) {
            self.tracked[pos].1 = Some(kind);
        } else {
            self.push_tracked(path, Some(kind), None);
        }
    }

    /// Record a worktree-vs-index change in the second slot, keeping any
    /// index change already recorded for the same path.
    pub fn record_worktree(&mut self, path: impl Into<String>, kind: ChangeKind) {
        let path = path.into();
        if let Some(&pos) = self.positions.get(&path) {
            self.tracked[pos].2 = Some(kind);
        } else {
            self.push_tracked(path, None, Some(kind));
        }
    }

    /// Record an untracked path. Repeats are ignored.
    pub fn record_untracked(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.untracked_seen.insert(path.clone()) {
            self.untracked.push(path);
        }
    }

    fn push_tracked(
        &mut self,
        path: String,
        index: Option<ChangeKind>,
        worktree: Option<ChangeKind>,
    ) {
        self.positions.insert(path.clone(), self.tracked.len());
        self.tracked.push((path, index, worktree));
    }

    /// Tracked records in first-seen order, then untracked ones.
    ///
    /// An untracked report for a path that also has a tracked record is
    /// dropped so each path appears once.
    #[must_use]
    pub fn finish(self) -> Vec<FileStatus> {
        let Self {
            tracked,
            positions,
            untracked,
            ..
        } = self;

        let mut statuses: Vec<FileStatus> = tracked
            .into_iter()
            .map(|(path, index, worktree)| FileStatus::tracked(path, index, worktree))
            .collect();
        statuses.extend(
            untracked
                .into_iter()
                .filter(|path| !positions.contains_key(path))
                .map(FileStatus::untracked),
        );
        statuses
    }
}

/// Keep statuses whose path starts with `prefix`.
#[must_use]
pub fn filter_by_prefix(statuses: Vec<FileStatus>, prefix: &str) -> Vec<FileStatus> {
    statuses
        .into_iter()
        .filter(|status| status.path.starts_with(prefix))
        .collect()
}
