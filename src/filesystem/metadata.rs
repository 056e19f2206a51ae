//! Entry kind and existence checks
//!
//! Checks follow symlinks, so a dangling link reports as absent.

use crate::error::{Result, ShellError};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

/// Kind of a filesystem entry as far as the shell cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory)
    File,
    /// Directory
    Directory,
}

impl EntryKind {
    /// Classify from a directory flag
    #[must_use]
    pub const fn from_is_dir(is_dir: bool) -> Self {
        if is_dir {
            Self::Directory
        } else {
            Self::File
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("File"),
            Self::Directory => f.write_str("Directory"),
        }
    }
}

/// Look up the kind of the entry at `path`
///
/// Returns `Ok(None)` when nothing exists at `path`.
///
/// # Errors
///
/// Returns `ShellError::Io` for failures other than "not found"
/// (e.g. permission denied on a parent directory).
pub async fn entry_kind(path: &Path) -> Result<Option<EntryKind>> {
    match compio::fs::metadata(path).await {
        Ok(metadata) => Ok(Some(EntryKind::from_is_dir(metadata.is_dir()))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ShellError::io(path, e)),
    }
}

/// Check whether any entry exists at `path`
///
/// Any metadata failure counts as "exists" except not-found, so callers that
/// refuse to overwrite stay on the safe side.
pub async fn exists(path: &Path) -> bool {
    match compio::fs::metadata(path).await {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}
