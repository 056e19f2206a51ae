//! Session working directory
//!
//! The shell never calls `chdir`. The current directory lives in a
//! [`WorkingDir`] value that is handed to every operation, and user input is
//! resolved against it.

use std::path::{Path, PathBuf};

/// Current directory of a shell session (always absolute)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir {
    current: PathBuf,
}

impl WorkingDir {
    /// Start a session in `dir`
    ///
    /// `dir` should be absolute; relative input is kept as given.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            current: dir.into(),
        }
    }

    /// The current directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.current
    }

    /// Resolve user input against the current directory
    ///
    /// Absolute input is returned unchanged, anything else is joined onto the
    /// current directory. The string is not trimmed or validated.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current.join(path)
        }
    }

    /// Replace the current directory
    pub fn enter(&mut self, dir: PathBuf) {
        tracing::debug!(
            "working directory: {} -> {}",
            self.current.display(),
            dir.display()
        );
        self.current = dir;
    }

    /// Parent of the current directory, or the directory itself at the root
    #[must_use]
    pub fn parent(&self) -> PathBuf {
        self.current
            .parent()
            .map_or_else(|| self.current.clone(), Path::to_path_buf)
    }
}
