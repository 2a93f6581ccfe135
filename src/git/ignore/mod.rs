// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ignore-list editor.
//!
//! Appends patterns to an ignore file without rewriting or reordering the
//! lines already there.
//!
//! ```text
//! existing:  "target/\n*.log"      (no trailing newline)
//! append:    ["*.log", "out/", "out/"]
//! result:    "target/\n*.log\nout/\n"
//! ```

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DeskResult;

/// A persisted ignore file (one pattern per line).
#[derive(Debug, Clone)]
pub struct IgnoreFile {
    path: PathBuf,
}

impl IgnoreFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> DeskResult<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Existing entries, trimmed, blank lines skipped. A missing file is empty.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn entries(&self) -> DeskResult<Vec<String>> {
        Ok(self
            .read()?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append the patterns not already present, in input order.
    ///
    /// Returns the patterns actually written; an empty result means the file
    /// was left untouched.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or written.
    pub fn append_missing<S: AsRef<str>>(&self, patterns: &[S]) -> DeskResult<Vec<String>> {
        let content = self.read()?;
        let mut known: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut added = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || known.contains(&pattern) {
                continue;
            }
            known.push(pattern);
            added.push(pattern.to_string());
        }
        if added.is_empty() {
            return Ok(added);
        }

        let mut text = String::new();
        if !content.is_empty() && !content.ends_with('\n') {
            text.push('\n');
        }
        for pattern in &added {
            text.push_str(pattern);
            text.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        debug!(file = %self.path.display(), count = added.len(), "ignore entries appended");
        Ok(added)
    }
}

#[cfg(test)]
mod tests;
