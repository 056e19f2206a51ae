//! Moving entries and changing the working directory
//!
//! `move_entry` has two rules depending on what the source is:
//! a directory is renamed to `dst` as a full path, while a file is moved
//! *into* `dst`, keeping its name.

use crate::entry;
use crate::error::{Result, ShellError};
use crate::filesystem::{self, EntryKind};
use crate::workdir::WorkingDir;
use std::path::{Path, PathBuf};
use tracing::info;

/// Question asked before creating a missing `cd` target
pub const CREATE_MISSING_PROMPT: &str = "Directory not found. Do you want to create it? (y/n): ";

/// Yes/no confirmation source used by interactive operations
pub trait Confirm {
    /// Ask `question` and report whether the answer was affirmative
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Console` if the answer cannot be read.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Where a moved entry ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Kind of the moved entry
    pub kind: EntryKind,
    /// Final path of the entry
    pub destination: PathBuf,
}

/// Result of a `cd` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeDir {
    /// Entered an existing directory
    Entered(PathBuf),
    /// Target was missing, created after confirmation, and entered
    Created(PathBuf),
    /// Target was missing and creation was declined
    Cancelled,
}

/// Move `src` to `dst`
///
/// - Directory source: renamed to `dst` (the new full path).
/// - File source: renamed to `dst/<file name of src>`.
///
/// # Errors
///
/// - `ShellError::SourceNotFound` if `src` does not exist
/// - `ShellError::Io` if the rename fails (e.g. `dst` missing for a file,
///   or a cross-device move)
pub async fn move_entry(src: &Path, dst: &Path) -> Result<MoveOutcome> {
    let kind = filesystem::entry_kind(src)
        .await?
        .ok_or_else(|| ShellError::SourceNotFound(src.to_path_buf()))?;

    let destination = match kind {
        EntryKind::Directory => dst.to_path_buf(),
        EntryKind::File => {
            let name = src
                .file_name()
                .ok_or_else(|| ShellError::NotFound(src.to_path_buf()))?;
            dst.join(name)
        }
    };

    compio::fs::rename(src, &destination)
        .await
        .map_err(|e| ShellError::io(src, e))?;

    info!("Moved {} {} to {}", kind, src.display(), destination.display());
    Ok(MoveOutcome { kind, destination })
}

/// Change the working directory to `raw` (resolved against `wd`)
///
/// A missing target is created and entered only if `confirm` answers yes;
/// otherwise `wd` is left untouched.
///
/// # Errors
///
/// - `ShellError::NotADirectory` if `raw` names an existing non-directory
/// - `ShellError::Console` if the confirmation cannot be read
/// - `ShellError::Io` if the directory cannot be created or resolved
pub async fn change_directory<C>(
    wd: &mut WorkingDir,
    raw: &str,
    confirm: &mut C,
) -> Result<ChangeDir>
where
    C: Confirm + ?Sized,
{
    let target = wd.resolve(raw);

    match filesystem::entry_kind(&target).await? {
        Some(EntryKind::Directory) => {
            let resolved = filesystem::canonicalize(&target).await?;
            wd.enter(resolved.clone());
            Ok(ChangeDir::Entered(resolved))
        }
        Some(EntryKind::File) => Err(ShellError::NotADirectory(target)),
        None => {
            if !confirm.confirm(CREATE_MISSING_PROMPT)? {
                return Ok(ChangeDir::Cancelled);
            }
            entry::create_dir(&target).await?;
            let resolved = filesystem::canonicalize(&target).await?;
            wd.enter(resolved.clone());
            Ok(ChangeDir::Created(resolved))
        }
    }
}

/// Move the working directory to its parent (stays put at the root)
pub fn back(wd: &mut WorkingDir) -> PathBuf {
    let parent = wd.parent();
    wd.enter(parent.clone());
    parent
}
