//! The closed set of shell commands.

use std::fmt;

/// A parsed command line, ready for dispatch.
///
/// `ls` and `cd` use their first argument; extra arguments are ignored.
/// Arguments to `pwd`, `help`, and `exit` are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ls { path: Option<String> },
    Cd { path: Option<String> },
    Pwd,
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Build a command from tokenizer output.
    pub fn from_tokens(name: &str, args: Vec<String>) -> Self {
        let first = args.into_iter().next();
        match name {
            "ls" => Command::Ls { path: first },
            "cd" => Command::Cd { path: first },
            "pwd" => Command::Pwd,
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// The command name as typed.
    pub fn name(&self) -> &str {
        match self {
            Command::Ls { .. } => "ls",
            Command::Cd { .. } => "cd",
            Command::Pwd => "pwd",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Unknown(name) => name,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Ls { path: Some(path) } | Command::Cd { path: Some(path) } => {
                write!(f, "{} {path:?}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
