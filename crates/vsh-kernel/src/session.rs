//! Shell session: the current directory cursor and the builtins that use it.
//!
//! A session owns a [`Filesystem`] anchored at the VFS root and a
//! [`VirtualPath`] cursor. Only a successful `cd` moves the cursor; every
//! failure is returned as a value and leaves the session untouched.
//!
//! `ls` normalizes its argument the same way `cd` does, so `ls ..` lists
//! exactly the directory `cd ..` would enter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::command::Command;
use crate::error::{VfsError, VfsOp};
use crate::help::help_text;
use crate::result::ExecResult;
use crate::tokenizer::tokenize;
use crate::vfs::{self, DirEntryKind, Filesystem, VirtualPath};

/// Message printed by `exit`.
pub const EXIT_MESSAGE: &str = "Shutting down...";

/// State of one running shell.
pub struct ShellSession {
    fs: Arc<dyn Filesystem>,
    current_dir: VirtualPath,
}

impl ShellSession {
    /// Create a session at `/`.
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            fs,
            current_dir: VirtualPath::root(),
        }
    }

    /// The physical directory all virtual paths resolve under.
    pub fn vfs_root(&self) -> &Path {
        self.fs.root()
    }

    pub fn current_dir(&self) -> &VirtualPath {
        &self.current_dir
    }

    /// Physical location of `input` relative to the current directory.
    pub fn resolve(&self, input: &str) -> PathBuf {
        vfs::resolve(self.vfs_root(), &self.current_dir, input)
    }

    /// `cd [path]`.
    ///
    /// With no path, return to `/`. Otherwise normalize the target lexically
    /// and move there if it exists and is a directory.
    pub async fn change_directory(&mut self, path: Option<&str>) -> Result<(), VfsError> {
        let Some(arg) = path else {
            self.current_dir = VirtualPath::root();
            debug!(cwd = %self.current_dir, "reset to root");
            return Ok(());
        };

        let candidate = self.current_dir.join(arg);
        let physical = self.resolve(&candidate.to_string());
        let kind = self
            .fs
            .kind(&physical)
            .await
            .map_err(|e| VfsError::from_io(VfsOp::Cd, arg, e))?;

        if kind != DirEntryKind::Directory {
            return Err(VfsError::NotADirectory {
                op: VfsOp::Cd,
                arg: arg.to_string(),
            });
        }

        debug!(from = %self.current_dir, to = %candidate, "changed directory");
        self.current_dir = candidate;
        Ok(())
    }

    /// `ls [path]`.
    ///
    /// Returns the immediate children of the target sorted by name, with
    /// directories marked by a trailing `/`. A file target lists as the
    /// path that was given.
    pub async fn list_directory(&self, path: Option<&str>) -> Result<Vec<String>, VfsError> {
        let target = match path {
            Some(arg) => self.current_dir.join(arg),
            None => self.current_dir.clone(),
        };
        let arg = path.map_or_else(|| self.current_dir.to_string(), str::to_string);
        let physical = self.resolve(&target.to_string());

        let kind = self
            .fs
            .kind(&physical)
            .await
            .map_err(|e| VfsError::from_io(VfsOp::Ls, &arg, e))?;
        if kind == DirEntryKind::File {
            return Ok(vec![arg]);
        }

        let mut entries = self
            .fs
            .list(&physical)
            .await
            .map_err(|e| VfsError::from_io(VfsOp::Ls, &arg, e))?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries.iter().map(|e| e.display_name()).collect())
    }

    /// `pwd`.
    pub fn print_working_directory(&self) -> String {
        self.current_dir.to_string()
    }

    /// Tokenize, dispatch, and render one raw input line.
    ///
    /// Blank lines produce an empty successful result. A quoted empty name
    /// such as `""` is a command like any other and is not found.
    pub async fn execute(&mut self, line: &str) -> ExecResult {
        let line = line.trim();
        if line.is_empty() {
            return ExecResult::default();
        }
        let (name, args) = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => return ExecResult::failure("", format!("parse error: {e}")),
        };

        let command = Command::from_tokens(&name, args);
        debug!(%command, "dispatch");
        self.dispatch(command).await
    }

    /// Run one parsed command.
    pub async fn dispatch(&mut self, command: Command) -> ExecResult {
        let name = command.name().to_string();
        match command {
            Command::Ls { path } => match self.list_directory(path.as_deref()).await {
                Ok(lines) => ExecResult::success(name, lines.join("\n")),
                Err(e) => ExecResult::failure(name, e.to_string()),
            },
            Command::Cd { path } => match self.change_directory(path.as_deref()).await {
                Ok(()) => ExecResult::success(name, ""),
                Err(e) => ExecResult::failure(name, e.to_string()),
            },
            Command::Pwd => ExecResult::success(name, self.print_working_directory()),
            Command::Help => ExecResult::success(name, help_text()),
            Command::Exit => ExecResult::exit(name, EXIT_MESSAGE),
            Command::Unknown(unknown) => {
                ExecResult::failure(name, format!("{unknown}: command not found"))
            }
        }
    }
}
