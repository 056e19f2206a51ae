//! Command-line interface definitions
//!
//! The shell itself is driven by stdin. These flags only cover startup
//! configuration: where the session begins and how much gets logged.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Interactive filesystem shell
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Starting location
    #[command(flatten)]
    pub paths: PathConfig,

    /// Output and logging configuration
    #[command(flatten)]
    pub output: OutputConfig,
}

// ============================================================================
// FUNCTIONAL GROUPS: Organized by what component consumes them
// ============================================================================

/// Paths configuration
///
/// Used by: `main()`, `WorkingDir::new()`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PathConfig {
    /// Directory the session starts in (default: the launch directory)
    #[arg(long, value_name = "DIR")]
    pub start_dir: Option<PathBuf>,
}

/// Output and logging configuration
///
/// Used by: `main()`, logging initialization
#[derive(clap::Args, Debug, Clone, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputConfig {
    /// Verbose diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl OutputConfig {
    /// Tracing level selected by the verbosity flags
    #[must_use]
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl Args {
    /// Validate command-line arguments
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The start directory does not exist
    /// - The start directory is not a directory
    /// - Both --quiet and --verbose options are used
    pub fn validate(&self) -> Result<()> {
        if let Some(start_dir) = &self.paths.start_dir {
            if !start_dir.exists() {
                anyhow::bail!("Start directory does not exist: {}", start_dir.display());
            }
            if !start_dir.is_dir() {
                anyhow::bail!("Start path is not a directory: {}", start_dir.display());
            }
        }

        if self.output.quiet && self.output.verbose > 0 {
            anyhow::bail!("Cannot use both --quiet and --verbose options");
        }

        Ok(())
    }

    /// Resolve the directory the session should start in
    ///
    /// # Errors
    ///
    /// Returns an error if the launch directory cannot be determined or the
    /// start directory cannot be canonicalized.
    pub fn start_dir(&self) -> Result<PathBuf> {
        // `..` and symlinks are resolved so `back` walks the physical parent
        let dir = match &self.paths.start_dir {
            Some(dir) => std::fs::canonicalize(dir)?,
            None => std::env::current_dir()?,
        };
        Ok(dir)
    }
}
