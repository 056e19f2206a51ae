//! Directory enumeration and other blocking calls
//!
//! `compio::fs` has no `read_dir`, `remove_dir_all` or `canonicalize`, so
//! these go through the blocking pool. Enumeration order is whatever the OS
//! returns; nothing here sorts.

use super::metadata::EntryKind;
use super::run_blocking;
use crate::error::{Result, ShellError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Entry name (basename only)
    pub name: OsString,
    /// Kind from the entry's own file type (symlinks are not followed)
    pub kind: EntryKind,
}

/// List the immediate children of `dir` in enumeration order
///
/// # Errors
///
/// Returns `ShellError::Io` if the directory cannot be read or an entry's
/// file type cannot be determined.
pub async fn read_entries(dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let dir = dir.to_path_buf();
    run_blocking(move || {
        let reader = std::fs::read_dir(&dir).map_err(|e| ShellError::io(&dir, e))?;
        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| ShellError::io(&dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ShellError::io(&entry.path(), e))?;
            entries.push(DirEntryInfo {
                name: entry.file_name(),
                kind: EntryKind::from_is_dir(file_type.is_dir()),
            });
        }
        Ok(entries)
    })
    .await
}

/// Remove a directory and everything below it
///
/// # Errors
///
/// Returns `ShellError::Io` if any part of the tree cannot be removed.
pub async fn remove_dir_all(dir: &Path) -> Result<()> {
    let dir = dir.to_path_buf();
    run_blocking(move || std::fs::remove_dir_all(&dir).map_err(|e| ShellError::io(&dir, e))).await
}

/// Resolve `path` to an absolute path with symlinks and `..` removed
///
/// # Errors
///
/// Returns `ShellError::Io` if the path does not exist or cannot be resolved.
pub async fn canonicalize(path: &Path) -> Result<PathBuf> {
    let path = path.to_path_buf();
    run_blocking(move || std::fs::canonicalize(&path).map_err(|e| ShellError::io(&path, e))).await
}
