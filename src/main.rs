//! fsh - interactive filesystem shell
//!
//! Stdout carries the interactive protocol; diagnostics go to stderr.

use anyhow::Result;
use clap::Parser;
use fsh::cli::Args;
use fsh::shell::{Console, Shell};
use fsh::workdir::WorkingDir;
use tracing::info;

#[compio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(args.output.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let start_dir = args.start_dir()?;
    info!("Starting session in {}", start_dir.display());

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut shell = Shell::new(WorkingDir::new(start_dir), console);
    shell.run().await?;

    Ok(())
}
