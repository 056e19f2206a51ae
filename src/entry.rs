//! Single-entry operations
//!
//! Create, rename and delete one filesystem entry. Creation and rename refuse
//! to touch an occupied path; copying (see [`crate::copy`]) does not.

use crate::error::{Result, ShellError};
use crate::filesystem::{self, EntryKind};
use std::path::Path;
use tracing::{debug, info};

/// Create an empty file at `path`
///
/// # Errors
///
/// - `ShellError::AlreadyExists` if a file or directory is already at `path`
/// - `ShellError::Io` if the file cannot be created
pub async fn create_file(path: &Path) -> Result<()> {
    if filesystem::exists(path).await {
        return Err(ShellError::AlreadyExists(path.to_path_buf()));
    }

    let file = compio::fs::File::create(path)
        .await
        .map_err(|e| ShellError::io(path, e))?;
    drop(file);

    info!("Created file {}", path.display());
    Ok(())
}

/// Create a directory at `path`, including any missing parents
///
/// # Errors
///
/// - `ShellError::AlreadyExists` if a file or directory is already at `path`
/// - `ShellError::Io` if any directory in the chain cannot be created
pub async fn create_dir(path: &Path) -> Result<()> {
    if filesystem::exists(path).await {
        return Err(ShellError::AlreadyExists(path.to_path_buf()));
    }

    compio::fs::create_dir_all(path)
        .await
        .map_err(|e| ShellError::io(path, e))?;

    info!("Created directory {}", path.display());
    Ok(())
}

/// Rename `from` to `to` (file or directory)
///
/// # Errors
///
/// - `ShellError::AlreadyExists` if `to` is occupied
/// - `ShellError::Io` if the OS rename fails (including a missing `from`)
pub async fn rename(from: &Path, to: &Path) -> Result<()> {
    if filesystem::exists(to).await {
        return Err(ShellError::AlreadyExists(to.to_path_buf()));
    }

    compio::fs::rename(from, to)
        .await
        .map_err(|e| ShellError::io(from, e))?;

    info!("Renamed {} to {}", from.display(), to.display());
    Ok(())
}

/// Delete the entry at `path`; directories are removed with their contents
///
/// Returns the kind of entry that was removed.
///
/// # Errors
///
/// - `ShellError::NotFound` if nothing exists at `path`
/// - `ShellError::Io` if removal fails
pub async fn delete(path: &Path) -> Result<EntryKind> {
    let kind = filesystem::entry_kind(path)
        .await?
        .ok_or_else(|| ShellError::NotFound(path.to_path_buf()))?;

    match kind {
        EntryKind::Directory => filesystem::remove_dir_all(path).await?,
        EntryKind::File => compio::fs::remove_file(path)
            .await
            .map_err(|e| ShellError::io(path, e))?,
    }

    debug!("Deleted {} {}", kind, path.display());
    Ok(kind)
}
