//! Core types for directory copying
//!
//! - `DirectoryStats`: Statistics tracking
//! - `CopyOutcome`: What happened to one entry below the copy root
//! - `CopyReport`: Everything a caller needs to inspect a partial failure

use crate::error::ShellError;
use crate::filesystem::EntryKind;
use std::path::PathBuf;

/// Directory copy operation statistics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Total number of files copied
    pub files_copied: u64,
    /// Total number of sub-directories copied (created or reused)
    pub directories_copied: u64,
    /// Total number of bytes copied
    pub bytes_copied: u64,
    /// Number of entries that failed
    pub errors: u64,
}

/// Result of copying one entry below the copy root
#[derive(Debug)]
pub struct CopyOutcome {
    /// Source path of the entry
    pub source: PathBuf,
    /// Destination path of the entry
    pub destination: PathBuf,
    /// Entry kind as enumerated in the source directory
    pub kind: EntryKind,
    /// Failure reason, `None` on success
    pub error: Option<ShellError>,
}

impl CopyOutcome {
    /// Whether this entry was copied
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-entry results of a best-effort directory copy
///
/// Entries appear in the order they were visited: depth-first, children in
/// source enumeration order.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// One outcome per visited entry
    pub entries: Vec<CopyOutcome>,
    /// Aggregated counters
    pub stats: DirectoryStats,
}

impl CopyReport {
    /// Entries that failed
    pub fn failures(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.entries.iter().filter(|outcome| !outcome.is_success())
    }

    /// True when every visited entry was copied
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stats.errors == 0
    }

    pub(super) fn record_file(&mut self, source: PathBuf, destination: PathBuf, bytes: u64) {
        self.stats.files_copied += 1;
        self.stats.bytes_copied += bytes;
        self.entries.push(CopyOutcome {
            source,
            destination,
            kind: EntryKind::File,
            error: None,
        });
    }

    pub(super) fn record_directory(&mut self, source: PathBuf, destination: PathBuf) {
        self.stats.directories_copied += 1;
        self.entries.push(CopyOutcome {
            source,
            destination,
            kind: EntryKind::Directory,
            error: None,
        });
    }

    pub(super) fn record_failure(
        &mut self,
        source: PathBuf,
        destination: PathBuf,
        kind: EntryKind,
        error: ShellError,
    ) {
        self.stats.errors += 1;
        self.entries.push(CopyOutcome {
            source,
            destination,
            kind,
            error: Some(error),
        });
    }
}
