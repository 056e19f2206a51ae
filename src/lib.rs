//! fsh: an interactive filesystem shell
//!
//! Reads commands line by line and performs one filesystem operation per
//! command: create, copy, move, rename, delete, list and change directory.
//! The session's working directory is an explicit [`workdir::WorkingDir`]
//! value, never the process-wide current directory.
//!
//! # Modules
//!
//! - [`entry`]: single-entry create / rename / delete
//! - [`copy`]: single-file copy with permission preservation
//! - [`directory`]: best-effort recursive directory copy
//! - [`navigation`]: move and working-directory changes
//! - [`listing`]: working directory listing
//! - [`shell`]: command vocabulary, console and read-eval loop

pub mod cli;
pub mod copy;
pub mod directory;
pub mod entry;
pub mod error;
pub mod filesystem;
pub mod listing;
pub mod navigation;
pub mod shell;
pub mod workdir;

pub use error::{Result, ShellError};
