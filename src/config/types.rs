// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gitdesk.
//!
//! ```text
//! Config: GlobalConfig (logging), GitConfig (executor + facade defaults)
//! BackendKind: gix (default) | shell
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Which access provider answers structured queries (status, branches, HEAD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Pure Rust, reads `.git/` directly.
    #[default]
    Gix,
    /// Parses git CLI porcelain output.
    Shell,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gix => write!(f, "gix"),
            Self::Shell => write!(f, "shell"),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gix" => Ok(Self::Gix),
            "shell" => Ok(Self::Shell),
            _ => Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "backend".to_string(),
                message: format!("expected 'gix' or 'shell', got '{s}'"),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// File log level (0-6).
    pub file_log_level: Option<LogLevel>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

/// Git executor and repository facade options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Git executable name or path.
    pub program: String,
    /// Structured query backend.
    pub backend: BackendKind,
    /// Remote used by pull/push/push-review when none is given.
    pub default_remote: String,
    /// Number of commits shown by `log` when no count is given.
    pub log_limit: usize,
    /// Ignore file, relative to the working-tree root.
    pub ignore_file: PathBuf,
    /// Extra `key=value` pairs passed as `-c key=value` to every invocation.
    pub options: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            backend: BackendKind::default(),
            default_remote: "origin".to_string(),
            log_limit: 20,
            ignore_file: PathBuf::from(".gitignore"),
            options: Vec::new(),
        }
    }
}

impl GitConfig {
    /// Validate values that serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            section: "git".to_string(),
            key: key.to_string(),
            message,
        };

        if self.program.trim().is_empty() {
            return Err(invalid("program", "must not be empty".to_string()));
        }
        if self.default_remote.trim().is_empty() {
            return Err(invalid("default_remote", "must not be empty".to_string()));
        }
        if self.log_limit == 0 {
            return Err(invalid("log_limit", "must be greater than 0".to_string()));
        }
        if self.ignore_file.as_os_str().is_empty() || self.ignore_file.is_absolute() {
            return Err(invalid(
                "ignore_file",
                format!(
                    "must be a path relative to the working tree, got '{}'",
                    self.ignore_file.display()
                ),
            ));
        }
        if let Some(bad) = self.options.iter().find(|o| !o.contains('=')) {
            return Err(invalid(
                "options",
                format!("expected 'key=value', got '{bad}'"),
            ));
        }
        Ok(())
    }
}
