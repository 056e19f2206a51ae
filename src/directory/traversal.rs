//! Directory traversal and recursive processing
//!
//! Depth-first walk driven by an explicit work stack instead of async
//! recursion. Children are pushed in reverse so they pop in enumeration
//! order, which visits entries in the same order a recursive copy would.

use crate::copy::copy_file;
use crate::error::{Result, ShellError};
use crate::filesystem::{self, DirEntryInfo, EntryKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::types::CopyReport;

/// One pending entry: source, destination, kind
struct WorkItem {
    src: PathBuf,
    dst: PathBuf,
    kind: EntryKind,
}

/// Ensure `dst` exists as a directory and enumerate `src`
async fn open_directory_pair(src: &Path, dst: &Path) -> Result<Vec<DirEntryInfo>> {
    compio::fs::create_dir_all(dst)
        .await
        .map_err(|e| ShellError::io(dst, e))?;
    filesystem::read_entries(src).await
}

fn push_children(stack: &mut Vec<WorkItem>, src: &Path, dst: &Path, children: Vec<DirEntryInfo>) {
    stack.extend(children.into_iter().rev().map(|child| WorkItem {
        src: src.join(&child.name),
        dst: dst.join(&child.name),
        kind: child.kind,
    }));
}

/// Copy the tree below `src` into `dst`, recording every entry in `report`
///
/// # Errors
///
/// Only root-level failures are returned: `dst` cannot be created or `src`
/// cannot be read. Failures below the root are recorded and skipped.
pub(super) async fn traverse_and_copy_directory_iterative(
    src: &Path,
    dst: &Path,
    report: &mut CopyReport,
) -> Result<()> {
    let root_children = open_directory_pair(src, dst).await?;

    let mut stack = Vec::new();
    push_children(&mut stack, src, dst, root_children);

    while let Some(item) = stack.pop() {
        match item.kind {
            EntryKind::File => match copy_file(&item.src, &item.dst).await {
                Ok(bytes) => {
                    debug!("Copied file {} ({} bytes)", item.src.display(), bytes);
                    report.record_file(item.src, item.dst, bytes);
                }
                Err(e) => {
                    warn!("Failed to copy file {}: {}", item.src.display(), e);
                    report.record_failure(item.src, item.dst, EntryKind::File, e);
                }
            },
            EntryKind::Directory => match open_directory_pair(&item.src, &item.dst).await {
                Ok(children) => {
                    debug!(
                        "Descending into {} ({} entries)",
                        item.src.display(),
                        children.len()
                    );
                    push_children(&mut stack, &item.src, &item.dst, children);
                    report.record_directory(item.src, item.dst);
                }
                Err(e) => {
                    // Subtree is skipped, siblings continue
                    warn!("Failed to copy directory {}: {}", item.src.display(), e);
                    report.record_failure(item.src, item.dst, EntryKind::Directory, e);
                }
            },
        }
    }

    Ok(())
}
