// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule lifecycle.
//!
//! ```text
//! remove_submodule(path)
//!   1. submodule deinit -f -- path
//!   2. rm -f -- path                     (directory present)
//!      rm --cached --ignore-unmatch      (directory missing)
//!   3. clean -fd -- path                 (only if anything is left)
//! ```

use tracing::{info, warn};

use super::Repository;
use crate::error::DeskResult;

impl Repository {
    /// Register `url` as a submodule checked out at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if `git submodule add` fails.
    pub fn add_submodule(&self, url: &str, path: &str, name: Option<&str>) -> DeskResult<()> {
        let mut args = vec!["submodule", "add", "--quiet"];
        if let Some(name) = name {
            args.extend(["--name", name]);
        }
        args.extend(["--", url, path]);
        self.git(&args)?;
        info!(url, path, "submodule added");
        Ok(())
    }

    /// Initialize and update all submodules recursively.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if the update fails.
    pub fn update_submodules(&self) -> DeskResult<()> {
        self.git(&["submodule", "update", "--init", "--recursive"])?;
        info!("submodules updated");
        Ok(())
    }

    /// Re-sync submodule URLs from `.gitmodules`, then update.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if either step fails.
    pub fn sync_submodules(&self) -> DeskResult<()> {
        self.git(&["submodule", "sync", "--recursive"])?;
        self.update_submodules()?;
        info!("submodules synced");
        Ok(())
    }

    /// Deinitialize, unregister and clean up the submodule at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::OperationFailed` if any step fails.
    pub fn remove_submodule(&self, path: &str) -> DeskResult<()> {
        let dir = self.root.join(path);
        self.git(&["submodule", "deinit", "-f", "--", path])?;
        if dir.exists() {
            self.git(&["rm", "-f", "--quiet", "--", path])?;
        } else {
            warn!(path, "submodule directory missing, removing index entry only");
            self.git(&["rm", "--cached", "--ignore-unmatch", "--quiet", "--", path])?;
        }
        if dir.exists() {
            self.git(&["clean", "-fd", "--quiet", "--", path])?;
        }
        info!(path, "submodule removed");
        Ok(())
    }
}
