//! Command vocabulary and parsed requests

use crate::error::ShellError;
use std::fmt;
use std::str::FromStr;

/// Top-level command keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `createFile`: create an empty file
    CreateFile,
    /// `createDir`: create a directory and any missing parents
    CreateDir,
    /// `copyFile`: copy one file, overwriting the destination
    CopyFile,
    /// `copyDir`: copy a tree recursively
    CopyDir,
    /// `move`: move a file into a directory, or a directory to a new path
    Move,
    /// `rename`: rename an entry in place
    Rename,
    /// `delete`: remove a file or a whole tree
    Delete,
    /// `list`: print the working directory contents
    List,
    /// `cd`: enter a directory, offering to create it
    Cd,
    /// `back`: go to the parent directory
    Back,
    /// `exit`: end the session
    Exit,
}

impl Command {
    /// Every command, in the order the prompt advertises them
    pub const ALL: [Self; 11] = [
        Self::CreateFile,
        Self::CreateDir,
        Self::CopyFile,
        Self::CopyDir,
        Self::Move,
        Self::Rename,
        Self::Delete,
        Self::List,
        Self::Cd,
        Self::Back,
        Self::Exit,
    ];

    /// Exact keyword typed at the prompt
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::CreateFile => "createFile",
            Self::CreateDir => "createDir",
            Self::CopyFile => "copyFile",
            Self::CopyDir => "copyDir",
            Self::Move => "move",
            Self::Rename => "rename",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Cd => "cd",
            Self::Back => "back",
            Self::Exit => "exit",
        }
    }

    /// Labels of the argument lines this command reads, in order
    #[must_use]
    pub const fn prompts(self) -> &'static [&'static str] {
        match self {
            Self::CreateFile => &["Enter filename: "],
            Self::CreateDir | Self::Cd => &["Enter directory name: "],
            Self::CopyFile | Self::CopyDir | Self::Move => {
                &["Enter source path: ", "Enter destination path: "]
            }
            Self::Rename => &["Enter current item name: ", "Enter new item name: "],
            Self::Delete => &["Enter item name: "],
            Self::List | Self::Back | Self::Exit => &[],
        }
    }

    /// The top-level prompt line
    #[must_use]
    pub fn menu() -> String {
        let keywords: Vec<&str> = Self::ALL.iter().map(|command| command.keyword()).collect();
        format!("\nEnter command ({}): ", keywords.join(", "))
    }
}

impl FromStr for Command {
    type Err = ShellError;

    /// Exact, case-sensitive match; no trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.keyword() == s)
            .ok_or_else(|| ShellError::InvalidCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A command together with its raw argument lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// File name to create
    CreateFile(String),
    /// Directory name to create
    CreateDir(String),
    /// Copy one file
    CopyFile {
        /// File to read
        source: String,
        /// File to create or overwrite
        destination: String,
    },
    /// Copy a directory tree
    CopyDir {
        /// Tree to read
        source: String,
        /// Directory to copy into (created if missing)
        destination: String,
    },
    /// Move an entry
    Move {
        /// Entry to move
        source: String,
        /// New directory path, or the directory a file goes into
        destination: String,
    },
    /// Rename an entry
    Rename {
        /// Current name
        from: String,
        /// New name, must not exist yet
        to: String,
    },
    /// Entry to delete
    Delete(String),
    /// List the working directory
    List,
    /// Directory to enter
    Cd(String),
    /// Enter the parent directory
    Back,
    /// End the session
    Exit,
}

impl Request {
    /// Pair `command` with the answers to its [`Command::prompts`]
    ///
    /// Missing answers become empty strings.
    #[must_use]
    pub fn new(command: Command, answers: Vec<String>) -> Self {
        let mut answers = answers.into_iter();
        let mut next = || answers.next().unwrap_or_default();
        match command {
            Command::CreateFile => Self::CreateFile(next()),
            Command::CreateDir => Self::CreateDir(next()),
            Command::CopyFile => Self::CopyFile {
                source: next(),
                destination: next(),
            },
            Command::CopyDir => Self::CopyDir {
                source: next(),
                destination: next(),
            },
            Command::Move => Self::Move {
                source: next(),
                destination: next(),
            },
            Command::Rename => Self::Rename {
                from: next(),
                to: next(),
            },
            Command::Delete => Self::Delete(next()),
            Command::List => Self::List,
            Command::Cd => Self::Cd(next()),
            Command::Back => Self::Back,
            Command::Exit => Self::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("createFile", Command::CreateFile)]
    #[case("createDir", Command::CreateDir)]
    #[case("copyFile", Command::CopyFile)]
    #[case("copyDir", Command::CopyDir)]
    #[case("move", Command::Move)]
    #[case("rename", Command::Rename)]
    #[case("delete", Command::Delete)]
    #[case("list", Command::List)]
    #[case("cd", Command::Cd)]
    #[case("back", Command::Back)]
    #[case("exit", Command::Exit)]
    fn test_parse_keyword(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(input.parse::<Command>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("ls")]
    #[case("CreateFile")]
    #[case("exit ")]
    #[case(" list")]
    fn test_parse_rejects_inexact_input(#[case] input: &str) {
        let err = input.parse::<Command>().unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommand(ref s) if s == input));
    }

    #[test]
    fn test_menu_lists_every_command() {
        assert_eq!(
            Command::menu(),
            "\nEnter command (createFile, createDir, copyFile, copyDir, move, rename, delete, list, cd, back, exit): "
        );
    }

    #[rstest]
    #[case(Command::CreateFile, 1)]
    #[case(Command::CopyDir, 2)]
    #[case(Command::Rename, 2)]
    #[case(Command::Cd, 1)]
    #[case(Command::List, 0)]
    #[case(Command::Exit, 0)]
    fn test_prompt_counts(#[case] command: Command, #[case] count: usize) {
        assert_eq!(command.prompts().len(), count);
    }

    #[test]
    fn test_request_takes_answers_in_order() {
        let request = Request::new(
            Command::Rename,
            vec!["old.txt".to_string(), "new.txt".to_string()],
        );
        assert_eq!(
            request,
            Request::Rename {
                from: "old.txt".to_string(),
                to: "new.txt".to_string()
            }
        );
    }

    #[test]
    fn test_request_without_arguments() {
        assert_eq!(Request::new(Command::Back, Vec::new()), Request::Back);
    }
}
