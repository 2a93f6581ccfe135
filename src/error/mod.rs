// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        DeskError (16 bytes)
//!               |
//!      +--------+--------+
//!      |        |        |
//!      v        v        v
//!     Git     Config     Io
//!     Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Git     NotARepository, OperationFailed, DetachedHead,
//!           ExecutableNotFound, SpawnFailed, InvalidPath, InvalidRefName,
//!           MalformedStatusLine, Gix
//!   Config  ParseError, InvalidValue, NotFound
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DeskError`].
pub type DeskResult<T> = std::result::Result<T, DeskError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl DeskError {
    /// Returns the git error if this is one.
    #[must_use]
    pub fn git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// True for [`GitError::NotARepository`].
    #[must_use]
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self.git(), Some(GitError::NotARepository { .. }))
    }

    /// True for [`GitError::OperationFailed`].
    #[must_use]
    pub fn is_operation_failed(&self) -> bool {
        matches!(self.git(), Some(GitError::OperationFailed { .. }))
    }

    /// True for [`GitError::DetachedHead`].
    #[must_use]
    pub fn is_detached_head(&self) -> bool {
        matches!(self.git(), Some(GitError::DetachedHead))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DeskError {
                fn from(err: $error) -> Self {
                    DeskError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    std::io::Error => Io,
}

impl From<GixError> for DeskError {
    fn from(err: GixError) -> Self {
        GitError::Gix(err).into()
    }
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Failed to iterate references.
    #[error("failed to iterate references: {0}")]
    References(String),

    /// Status walk failed.
    #[error("failed to compute status: {0}")]
    Status(String),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path is not the root of a non-bare working tree.
    #[error("{path} is not a git repository")]
    NotARepository { path: String },

    /// Git exited with a non-zero status.
    #[error("git command failed: {command} (exit code {exit_code}) - {stderr}")]
    OperationFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// HEAD does not point at a branch.
    #[error("HEAD is detached, not on a branch")]
    DetachedHead,

    /// Git executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn git.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Path cannot be passed to git as UTF-8 text.
    #[error("invalid path: {path}")]
    InvalidPath { path: String },

    /// Branch, tag or start-point name git would read as an option.
    #[error("invalid ref name: {name:?}")]
    InvalidRefName { name: String },

    /// Porcelain status output did not match `XY path`.
    #[error("malformed status line: {line:?}")]
    MalformedStatusLine { line: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
