//! Shared filesystem helpers
//!
//! Thin wrappers used by every shell operation: existence and kind checks,
//! and the calls that have no `compio::fs` counterpart (directory listing,
//! recursive removal, canonicalization), which run on the blocking pool.

pub mod metadata;
pub mod walker;

pub use metadata::{entry_kind, exists, EntryKind};
pub use walker::{canonicalize, read_entries, remove_dir_all, DirEntryInfo};

use crate::error::{Result, ShellError};

/// Run a blocking filesystem call on compio's blocking pool and await it
///
/// # Errors
///
/// Returns the closure's own error, or `ShellError::Runtime` if the task
/// could not be completed.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    compio::runtime::spawn_blocking(f)
        .await
        .map_err(|e| ShellError::Runtime(format!("spawn_blocking failed: {e:?}")))
        .and_then(|r| r)
}
