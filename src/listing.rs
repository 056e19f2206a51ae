//! Working directory listing
//!
//! Read live on every call; names come back in enumeration order.

use crate::error::Result;
use crate::filesystem;
use crate::workdir::WorkingDir;
use std::fmt;
use std::path::PathBuf;

/// Snapshot of the working directory and its immediate children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Absolute path of the listed directory
    pub directory: PathBuf,
    /// Child names (files and directories), unsorted
    pub entries: Vec<String>,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current directory: {}", self.directory.display())?;
        writeln!(f, "Contents:")?;
        for name in &self.entries {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}

/// List the working directory
///
/// # Errors
///
/// Returns `ShellError::Io` if the directory cannot be read (for instance
/// after it was deleted from under the session).
pub async fn list(wd: &WorkingDir) -> Result<Listing> {
    let entries = filesystem::read_entries(wd.path())
        .await?
        .into_iter()
        .map(|entry| entry.name.to_string_lossy().into_owned())
        .collect();

    Ok(Listing {
        directory: wd.path().to_path_buf(),
        entries,
    })
}
