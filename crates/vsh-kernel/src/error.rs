//! Error types for the tokenizer, the VFS resolver, and configuration.
//!
//! Every error here is recovered where it originates and turned into a
//! user-visible message; `Display` produces that message verbatim.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed command-line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted region was still open at end of input.
    #[error("unterminated {} quote starting at column {}", quote_name(*.quote), .position + 1)]
    UnterminatedQuote {
        /// The opening quote character (`"` or `'`).
        quote: char,
        /// Character offset of the opening quote.
        position: usize,
    },
}

fn quote_name(quote: char) -> &'static str {
    if quote == '\'' { "single" } else { "double" }
}

/// The builtin that hit a VFS error, used to shape its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VfsOp {
    Cd,
    Ls,
}

impl VfsOp {
    fn render(&self, arg: &str, reason: &str) -> String {
        match self {
            VfsOp::Cd => format!("cd: {arg}: {reason}"),
            VfsOp::Ls => format!("ls: cannot access '{arg}': {reason}"),
        }
    }
}

/// Failure of a path operation. `arg` is the path exactly as the user typed it.
#[derive(Debug, Error)]
pub enum VfsError {
    #[error("{}", .op.render(.arg, "No such file or directory"))]
    NotFound { op: VfsOp, arg: String },

    #[error("{}", .op.render(.arg, "Not a directory"))]
    NotADirectory { op: VfsOp, arg: String },

    /// The physical path left the VFS root (for example through a symlink).
    #[error("{}", .op.render(.arg, "Permission denied"))]
    PermissionDenied { op: VfsOp, arg: String },

    #[error("{}", .op.render(.arg, &.source.to_string()))]
    Io {
        op: VfsOp,
        arg: String,
        #[source]
        source: io::Error,
    },
}

impl VfsError {
    /// Classify an I/O error raised while touching `arg`.
    pub fn from_io(op: VfsOp, arg: impl Into<String>, err: io::Error) -> Self {
        let arg = arg.into();
        match err.kind() {
            io::ErrorKind::NotFound => VfsError::NotFound { op, arg },
            io::ErrorKind::NotADirectory => VfsError::NotADirectory { op, arg },
            io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { op, arg },
            _ => VfsError::Io { op, arg, source: err },
        }
    }
}

/// Configuration could not be loaded. Never fatal: callers fall back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_quote_message_is_one_based() {
        let err = ParseError::UnterminatedQuote { quote: '"', position: 3 };
        assert_eq!(err.to_string(), "unterminated double quote starting at column 4");

        let err = ParseError::UnterminatedQuote { quote: '\'', position: 0 };
        assert_eq!(err.to_string(), "unterminated single quote starting at column 1");
    }

    #[test]
    fn vfs_messages_match_shell_conventions() {
        let err = VfsError::NotFound { op: VfsOp::Cd, arg: "nope".into() };
        assert_eq!(err.to_string(), "cd: nope: No such file or directory");

        let err = VfsError::NotADirectory { op: VfsOp::Cd, arg: "file.txt".into() };
        assert_eq!(err.to_string(), "cd: file.txt: Not a directory");

        let err = VfsError::NotFound { op: VfsOp::Ls, arg: "missing".into() };
        assert_eq!(err.to_string(), "ls: cannot access 'missing': No such file or directory");
    }

    #[test]
    fn from_io_classifies_by_kind() {
        let err = VfsError::from_io(VfsOp::Ls, "x", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, VfsError::NotFound { .. }));

        let err = VfsError::from_io(VfsOp::Cd, "x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, VfsError::PermissionDenied { op: VfsOp::Cd, .. }));

        let err = VfsError::from_io(VfsOp::Ls, "x", io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "ls: cannot access 'x': disk on fire");
    }
}
