//! Read-eval loop
//!
//! One line is read, matched against the command vocabulary, its argument
//! lines are read, and exactly one operation runs to completion before the
//! next line is read. Operation errors are printed and the loop continues;
//! only `exit`, end of input, or a console failure end the session.

mod command;
mod console;

pub use command::{Command, Request};
pub use console::Console;

use crate::directory::{self, CopyReport};
use crate::error::{Result, ShellError};
use crate::navigation::{self, ChangeDir};
use crate::workdir::WorkingDir;
use crate::{copy, entry, listing};
use std::io::{BufRead, Write};
use tracing::debug;

/// What the loop does after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// End the session
    Exit,
}

/// Interactive shell session
pub struct Shell<R, W> {
    wd: WorkingDir,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Start a session in `wd` talking over `console`
    pub const fn new(wd: WorkingDir, console: Console<R, W>) -> Self {
        Self { wd, console }
    }

    /// Current working directory of the session
    pub const fn working_dir(&self) -> &WorkingDir {
        &self.wd
    }

    /// End the session and give back the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until `exit` or end of input
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Console` if the console cannot be read or
    /// written. Operation failures are printed, never returned.
    pub async fn run(&mut self) -> Result<()> {
        self.show_listing().await?;

        loop {
            let Some(line) = self.console.prompt(&Command::menu())? else {
                debug!("End of input, leaving");
                return Ok(());
            };

            match self.step(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => self.report(e)?,
            }
        }
    }

    /// Handle one top-level input line, reading its arguments from the console
    ///
    /// # Errors
    ///
    /// Returns the operation's error (for the caller to print) or a fatal
    /// `ShellError::Console`.
    pub async fn step(&mut self, line: &str) -> Result<Flow> {
        let command: Command = line.parse()?;
        debug!("Command: {}", command);

        let mut answers = Vec::with_capacity(command.prompts().len());
        for label in command.prompts() {
            match self.console.prompt(label)? {
                Some(answer) => answers.push(answer),
                None => return Ok(Flow::Exit),
            }
        }

        self.execute(Request::new(command, answers)).await
    }

    /// Run one request against the working directory
    ///
    /// # Errors
    ///
    /// Returns the operation's error, or `ShellError::Console` on output failure.
    pub async fn execute(&mut self, request: Request) -> Result<Flow> {
        match request {
            Request::CreateFile(name) => {
                entry::create_file(&self.wd.resolve(&name)).await?;
                self.console.say(format_args!("File '{name}' created."))?;
            }
            Request::CreateDir(name) => {
                entry::create_dir(&self.wd.resolve(&name)).await?;
                self.console.say(format_args!("Directory '{name}' created."))?;
            }
            Request::CopyFile {
                source,
                destination,
            } => {
                let bytes =
                    copy::copy_file(&self.wd.resolve(&source), &self.wd.resolve(&destination))
                        .await?;
                self.console.say(format_args!(
                    "Copied '{source}' to '{destination}' ({bytes} bytes)."
                ))?;
            }
            Request::CopyDir {
                source,
                destination,
            } => {
                let report = directory::copy_directory(
                    &self.wd.resolve(&source),
                    &self.wd.resolve(&destination),
                )
                .await?;
                self.show_copy_report(&source, &destination, &report)?;
            }
            Request::Move {
                source,
                destination,
            } => {
                let outcome = navigation::move_entry(
                    &self.wd.resolve(&source),
                    &self.wd.resolve(&destination),
                )
                .await?;
                let noun = outcome.kind.to_string().to_lowercase();
                self.console
                    .say(format_args!("Moved {noun} '{source}' to '{destination}'"))?;
            }
            Request::Rename { from, to } => {
                entry::rename(&self.wd.resolve(&from), &self.wd.resolve(&to)).await?;
                self.console
                    .say(format_args!("Item '{from}' renamed to '{to}'."))?;
            }
            Request::Delete(name) => {
                let kind = entry::delete(&self.wd.resolve(&name)).await?;
                self.console.say(format_args!("{kind} '{name}' deleted."))?;
            }
            Request::List => self.show_listing().await?,
            Request::Cd(name) => {
                self.change_directory(&name).await?;
                self.show_listing().await?;
            }
            Request::Back => {
                navigation::back(&mut self.wd);
                self.show_listing().await?;
            }
            Request::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// `cd` never fails on its own: problems are printed and the listing follows
    async fn change_directory(&mut self, name: &str) -> Result<()> {
        match navigation::change_directory(&mut self.wd, name, &mut self.console).await {
            Ok(ChangeDir::Entered(_)) => Ok(()),
            Ok(ChangeDir::Created(_)) => self
                .console
                .say(format_args!("Directory '{name}' created.")),
            Ok(ChangeDir::Cancelled) => self.console.say("Navigation cancelled."),
            Err(e) => self.report(e),
        }
    }

    async fn show_listing(&mut self) -> Result<()> {
        match listing::list(&self.wd).await {
            Ok(listing) => self.console.print(listing),
            Err(e) => self.report(e),
        }
    }

    fn show_copy_report(
        &mut self,
        source: &str,
        destination: &str,
        report: &CopyReport,
    ) -> Result<()> {
        for failure in report.failures() {
            if let Some(error) = &failure.error {
                self.console.say(error)?;
            }
        }
        let stats = &report.stats;
        self.console.say(format_args!(
            "Copied '{source}' to '{destination}': {} files, {} directories, {} failed.",
            stats.files_copied, stats.directories_copied, stats.errors
        ))
    }

    /// Print a non-fatal error; hand a fatal one back
    fn report(&mut self, error: ShellError) -> Result<()> {
        if error.is_fatal() {
            return Err(error);
        }
        debug!("{} error: {}", error.kind(), error);
        self.console.say(error)
    }
}
