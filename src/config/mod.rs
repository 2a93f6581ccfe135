// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitdesk.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitdesk.toml (cwd, optional)
//! 3. <repo>/.gitdesk.toml (optional)
//! 4. --config FILE (repeatable)
//! 5. GITDESK_* env vars
//! 6. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITDESK_GIT__BACKEND=shell       → git.backend = "shell"
//! GITDESK_GLOBAL__LOG_LEVEL=debug  → global.log_level = 4
//! GITDESK_GIT__OPTIONS=a=1,b=2     → git.options = ["a=1", "b=2"]
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! log_level = 3
//!
//! [git]
//! backend = "shell"
//! log_limit = 50
//! options = ["core.quotePath=false"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::logging::LogLevel;

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git executor and facade options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitdesk::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitdesk.toml")
    ///     .with_env_prefix("GITDESK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.git.validate()?;
        Ok(())
    }

    /// Format configuration options as `key = value` lines, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        let level = |l: LogLevel| format!("{} ({l})", l.as_u8());
        options.insert("global.log_level".to_string(), level(self.global.log_level));
        options.insert(
            "global.file_log_level".to_string(),
            self.global
                .file_log_level
                .map_or_else(|| "(log_level)".to_string(), level),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string()),
        );
        options.insert("git.program".to_string(), self.git.program.clone());
        options.insert("git.backend".to_string(), self.git.backend.to_string());
        options.insert(
            "git.default_remote".to_string(),
            self.git.default_remote.clone(),
        );
        options.insert("git.log_limit".to_string(), self.git.log_limit.to_string());
        options.insert(
            "git.ignore_file".to_string(),
            self.git.ignore_file.display().to_string(),
        );
        options.insert(
            "git.options".to_string(),
            if self.git.options.is_empty() {
                "(none)".to_string()
            } else {
                self.git.options.join(", ")
            },
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
