//! Shared helpers for integration tests

#![allow(dead_code)] // Not every test file uses every helper
#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a test needs to know about one entry of a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Directory,
    File { content: Vec<u8>, mode: u32 },
}

/// Walk `root` and record every entry below it, keyed by relative path
pub fn snapshot_tree(root: &Path) -> BTreeMap<PathBuf, Snapshot> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.expect("walk failed");
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("entry outside root")
                .to_path_buf();
            let snapshot = if entry.file_type().is_dir() {
                Snapshot::Directory
            } else {
                Snapshot::File {
                    content: fs::read(entry.path()).expect("read failed"),
                    mode: file_mode(entry.path()),
                }
            };
            (relative, snapshot)
        })
        .collect()
}

#[cfg(unix)]
pub fn file_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).expect("metadata failed").permissions().mode() & 0o7777
}

#[cfg(not(unix))]
pub fn file_mode(path: &Path) -> u32 {
    u32::from(fs::metadata(path).expect("metadata failed").permissions().readonly())
}

/// Canonical form of a temp path (macOS /var -> /private/var and the like)
pub fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize failed")
}
