// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch and tag lifecycle.

use tracing::info;

use super::Repository;
use crate::error::{DeskResult, GitError};

/// Reject empty names and names git would parse as an option.
fn ref_arg(name: &str) -> DeskResult<&str> {
    if name.is_empty() || name.starts_with('-') {
        return Err(GitError::InvalidRefName {
            name: name.to_string(),
        }
        .into());
    }
    Ok(name)
}

impl Repository {
    /// Local branch names, sorted.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if references cannot be listed.
    pub fn branches(&self) -> DeskResult<Vec<String>> {
        self.query.branches(&self.root)
    }

    /// Name of the checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` when HEAD is not a branch.
    pub fn current_branch(&self) -> DeskResult<String> {
        self.query
            .current_branch(&self.root)?
            .ok_or_else(|| GitError::DetachedHead.into())
    }

    /// Switch to `branch`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the checkout fails.
    pub fn checkout(&self, branch: &str) -> DeskResult<()> {
        self.git(&[
            "-c",
            "advice.detachedHead=false",
            "checkout",
            "--quiet",
            branch,
            "--",
        ])?;
        info!(branch, "checked out");
        Ok(())
    }

    /// Create `name` at `start_point` (HEAD when `None`) without switching to it.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidRefName` for a name or start point starting with
    /// `-`, or `GitError::OperationFailed` if the branch exists or the start point
    /// is unknown.
    pub fn create_branch(&self, name: &str, start_point: Option<&str>) -> DeskResult<()> {
        let mut args = vec!["branch", ref_arg(name)?];
        if let Some(start) = start_point {
            args.push(ref_arg(start)?);
        }
        self.git(&args)?;
        info!(branch = name, start_point, "branch created");
        Ok(())
    }

    /// Rename a local branch.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidRefName` for a name starting with `-`, or
    /// `GitError::OperationFailed` if `old` is missing or `new` exists.
    pub fn rename_branch(&self, old: &str, new: &str) -> DeskResult<()> {
        self.git(&["branch", "-m", ref_arg(old)?, ref_arg(new)?])?;
        info!(old, new, "branch renamed");
        Ok(())
    }

    /// Delete a local branch; without `force`, unmerged branches are refused.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidRefName` for a name starting with `-`, or
    /// `GitError::OperationFailed` if git refuses the deletion.
    pub fn delete_branch(&self, name: &str, force: bool) -> DeskResult<()> {
        let flag = if force { "-D" } else { "-d" };
        self.git(&["branch", flag, ref_arg(name)?])?;
        info!(branch = name, force, "branch deleted");
        Ok(())
    }

    /// Tag HEAD: annotated when `message` is non-empty, lightweight otherwise.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidRefName` for a name starting with `-`, or
    /// `GitError::OperationFailed` if the tag exists.
    pub fn create_tag(&self, name: &str, message: Option<&str>) -> DeskResult<()> {
        let name = ref_arg(name)?;
        match message.filter(|m| !m.is_empty()) {
            Some(message) => self.git(&["tag", "-a", name, "-m", message])?,
            None => self.git(&["tag", name])?,
        };
        info!(tag = name, annotated = message.is_some_and(|m| !m.is_empty()), "tag created");
        Ok(())
    }

    /// Delete a tag.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the tag does not exist.
    pub fn delete_tag(&self, name: &str) -> DeskResult<()> {
        self.git(&["tag", "-d", ref_arg(name)?])?;
        info!(tag = name, "tag deleted");
        Ok(())
    }

    /// Detach HEAD at the commit `name` points to.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the tag does not exist.
    pub fn checkout_tag(&self, name: &str) -> DeskResult<()> {
        let tag = format!("refs/tags/{}", ref_arg(name)?);
        self.git(&[
            "-c",
            "advice.detachedHead=false",
            "checkout",
            "--quiet",
            "--detach",
            &tag,
        ])?;
        info!(tag = name, "checked out tag");
        Ok(())
    }
}
