//! Error types for shell operations
//!
//! Every filesystem operation returns [`Result`]. The command loop turns an
//! error into a single human-readable line and keeps going. Only
//! [`ShellError::Console`] ends the session.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by shell operations
#[derive(Debug, Error)]
pub enum ShellError {
    /// Target path is already occupied by a file or directory
    #[error("Error: '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Source path does not exist
    #[error("Item '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    /// Source of a move does not exist
    #[error("File or directory not found.")]
    SourceNotFound(PathBuf),

    /// Path exists but a directory was required
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Generic OS-level failure (permission denied, disk full, ...)
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path the failing call was made on
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Input did not match any known command
    #[error("Invalid command")]
    InvalidCommand(String),

    /// Console could not be read or written (ends the session)
    #[error("Console I/O failed: {0}")]
    Console(#[source] std::io::Error),

    /// A blocking filesystem task did not run to completion
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl ShellError {
    /// Wrap an OS error together with the path it was raised for
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the session has to stop because of this error
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Console(_))
    }

    /// Short machine-friendly name of the error category
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "already-exists",
            Self::NotFound(_) | Self::SourceNotFound(_) => "not-found",
            Self::NotADirectory(_) => "not-a-directory",
            Self::Io { .. } => "io",
            Self::InvalidCommand(_) => "invalid-command",
            Self::Console(_) => "console",
            Self::Runtime(_) => "runtime",
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ShellError>;
