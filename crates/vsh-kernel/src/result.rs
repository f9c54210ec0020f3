//! ExecResult — the rendered outcome of one command line.
//!
//! The front-end prints `out` on success and `err` on failure, and ends the
//! session when `exit` is set.

/// The result of executing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Command name as typed (empty for blank lines and parse errors).
    pub command: String,
    /// Exit code. 0 means success.
    pub code: i64,
    /// Normal output, possibly multi-line, without a trailing newline.
    pub out: String,
    /// User-visible error message.
    pub err: String,
    /// True when the session should terminate.
    pub exit: bool,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(command: impl Into<String>, out: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            out: out.into(),
            ..Self::default()
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(command: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            code: 1,
            err: err.into(),
            ..Self::default()
        }
    }

    /// Create the result of `exit`.
    pub fn exit(command: impl Into<String>, out: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::success(command, out)
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// The text to show the user: `out` on success, `err` on failure.
    pub fn rendered(&self) -> &str {
        if self.ok() { &self.out } else { &self.err }
    }
}
