// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings for the desk.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("gitdesk.toml")      cwd
//!   .add_repository_file(repo)                   <repo>/.gitdesk.toml
//!   .add_toml_file(--config)                     must exist
//!   .with_env_prefix("GITDESK")                  GITDESK_GIT__BACKEND=shell
//!   .set("git.backend", ..)                      command-line flags
//!        |
//!        v
//!    build() --> Config (validated)
//! ```
//!
//! Later layers win. Sources are recorded so `gitdesk config-files` can say
//! where a setting came from.

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// Per-repository settings file, looked up in the working-tree root.
pub const REPOSITORY_CONFIG_FILE: &str = ".gitdesk.toml";

/// One layer fed into the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A TOML file; `required` files must exist when building.
    File { path: PathBuf, required: bool },
    /// TOML text passed in directly.
    Inline,
}

impl ConfigSource {
    fn is_present(&self) -> bool {
        match self {
            Self::File { path, .. } => path.is_file(),
            Self::Inline => true,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File {
                path,
                required: true,
            } => write!(f, "file: {}", path.display()),
            Self::File {
                path,
                required: false,
            } => write!(f, "optional: {}", path.display()),
            Self::Inline => f.write_str("inline: <string>"),
        }
    }
}

/// Collects configuration layers and merges them into a [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self.sources.push(ConfigSource::File {
            path: path.to_path_buf(),
            required,
        });
        self
    }

    /// Adds a TOML file that must exist; `build()` fails with `NotFound` otherwise.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    /// Adds `<root>/.gitdesk.toml` if the working tree carries one.
    #[must_use]
    pub fn add_repository_file<P: AsRef<Path>>(self, root: P) -> Self {
        self.add_toml_file_optional(root.as_ref().join(REPOSITORY_CONFIG_FILE))
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` variables, e.g. `GITDESK_GIT__LOG_LIMIT=50`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides a single dotted key such as `git.backend`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the key cannot be addressed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self.builder.set_override(key, value).map_err(parse_error)?;
        Ok(self)
    }

    /// Merges every layer and validates the result.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NotFound` for a missing required file.
    /// - `ConfigError::ParseError` for bad TOML or values of the wrong shape.
    /// - `ConfigError::InvalidValue` from [`Config::validate`].
    pub fn build(self) -> Result<Config> {
        let missing = self.sources.iter().find_map(|source| match source {
            ConfigSource::File {
                path,
                required: true,
            } if !path.is_file() => Some(path),
            _ => None,
        });
        if let Some(path) = missing {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("git.options"),
            );
        }

        let config: Config = builder
            .build()
            .and_then(config::Config::try_deserialize::<Config>)
            .map_err(parse_error)?;
        config.validate()?;
        Ok(config)
    }

    /// Layers that currently contribute: required files, optional files that
    /// exist, and inline strings.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<ConfigSource> {
        self.sources
            .iter()
            .filter(|source| source.is_present())
            .cloned()
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(e: config::ConfigError) -> ConfigError {
    ConfigError::ParseError {
        message: e.to_string(),
    }
}
