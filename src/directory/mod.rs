//! Directory tree copying
//!
//! Recursively duplicates a directory: every sub-directory is created (or
//! reused) at the destination and every file is copied with
//! [`crate::copy::copy_file`]. The copy is best-effort: a failing entry is
//! recorded in the returned [`CopyReport`] and the walk moves on to its
//! siblings. Nothing is rolled back.
//!
//! # Module Organization
//!
//! - `types`: Report and statistics types
//! - `traversal`: Depth-first traversal logic
//! - `mod`: Public API (this file)

mod traversal;
mod types;

pub use types::{CopyOutcome, CopyReport, DirectoryStats};

use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Copy an entire directory tree from source to destination
///
/// Creates `dst` (and missing parents) when absent, then copies every child
/// of `src` in enumeration order. Existing destination files are overwritten.
///
/// # Arguments
///
/// * `src` - Source directory path to copy from
/// * `dst` - Destination directory path to copy to
///
/// # Returns
///
/// Returns a `CopyReport` with one outcome per entry below the root and the
/// aggregated `DirectoryStats`.
///
/// # Errors
///
/// Returns error only if:
/// - Destination directory can't be created
/// - Source directory can't be read
pub async fn copy_directory(src: &Path, dst: &Path) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    info!(
        "Starting directory copy from {} to {}",
        src.display(),
        dst.display()
    );

    traversal::traverse_and_copy_directory_iterative(src, dst, &mut report).await?;

    let stats = &report.stats;
    info!(
        "Directory copy completed: {} files, {} directories, {} bytes, {} errors",
        stats.files_copied, stats.directories_copied, stats.bytes_copied, stats.errors
    );

    Ok(report)
}
