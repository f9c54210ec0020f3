//! vsh-kernel: the core of the vsh shell emulator.
//!
//! This crate provides:
//!
//! - **Tokenizer**: splits a raw input line into a command and arguments,
//!   honoring single and double quotes
//! - **Commands**: the closed set of builtins (`ls`, `cd`, `pwd`, `help`, `exit`)
//! - **VFS**: virtual paths, resolution onto a physical root, and the
//!   `Filesystem` trait with its local backend
//! - **Session**: the current directory cursor and `cd`/`ls`/`pwd` semantics
//! - **Kernel**: a serialized service wrapper around one session, plus
//!   startup-script execution
//! - **Config**: TOML configuration with non-fatal fallback to defaults

pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod kernel;
pub mod paths;
pub mod result;
pub mod script;
pub mod session;
pub mod tokenizer;
pub mod vfs;

pub use command::Command;
pub use config::ShellConfig;
pub use error::{ConfigError, ParseError, VfsError};
pub use kernel::Kernel;
pub use result::ExecResult;
pub use session::ShellSession;
pub use tokenizer::tokenize;
pub use vfs::{Filesystem, LocalFs, VirtualPath};
