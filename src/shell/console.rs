//! Line-based console I/O
//!
//! Generic over any `BufRead`/`Write` pair so sessions can be scripted in
//! tests. A read returning zero bytes is end of input.

use crate::error::{Result, ShellError};
use crate::navigation::Confirm;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Prompting console over an input and an output stream
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and an output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` (no newline) and read one line
    ///
    /// The trailing line terminator is removed; nothing else is trimmed.
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Console` if writing the label or reading fails.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.output
            .write_all(label.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(ShellError::Console)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(ShellError::Console)?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Print `message` followed by a newline
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Console` if the output cannot be written.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}").map_err(ShellError::Console)
    }

    /// Print `text` as-is
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Console` if the output cannot be written.
    pub fn print(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{text}").map_err(ShellError::Console)
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirm for Console<R, W> {
    /// Only the exact answer `y` confirms; end of input declines
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.prompt(question)?.is_some_and(|answer| answer == "y"))
    }
}
