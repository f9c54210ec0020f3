//! Kernel: a shareable handle that runs commands against one session.
//!
//! Every command holds the session lock from tokenizing to rendering, so a
//! `cd` from one caller never interleaves with a read from another. A script
//! holds the lock for all of its lines, so its relative paths resolve against
//! the directories its own earlier lines entered.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::result::ExecResult;
use crate::session::ShellSession;
use crate::vfs::{Filesystem, LocalFs, VirtualPath};

/// One line of a script together with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: String,
    pub result: ExecResult,
}

/// The vsh kernel.
pub struct Kernel {
    session: Mutex<ShellSession>,
    vfs_root: PathBuf,
}

impl Kernel {
    /// Create a kernel over any filesystem backend.
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        let vfs_root = fs.root().to_path_buf();
        Self {
            session: Mutex::new(ShellSession::new(fs)),
            vfs_root,
        }
    }

    /// Create a kernel over the real directory at `root`.
    pub fn local(root: impl AsRef<Path>) -> io::Result<Self> {
        let fs = LocalFs::new(root)?;
        info!(root = %fs.root().display(), "VFS root");
        Ok(Self::new(Arc::new(fs)))
    }

    /// The physical directory the VFS is anchored at.
    pub fn vfs_root(&self) -> &Path {
        &self.vfs_root
    }

    /// Snapshot of the current directory.
    pub async fn cwd(&self) -> VirtualPath {
        self.session.lock().await.current_dir().clone()
    }

    /// Execute one raw input line.
    pub async fn execute(&self, line: &str) -> ExecResult {
        let mut session = self.session.lock().await;
        session.execute(line).await
    }

    /// Execute script lines in order, as if typed.
    ///
    /// Stops after the first line whose result asks to exit; the returned
    /// steps end with that line. Other callers wait until the script is done.
    pub async fn run_script<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ScriptStep> {
        let mut session = self.session.lock().await;
        let mut steps = Vec::with_capacity(lines.len());
        for line in lines {
            let line = line.as_ref();
            let result = session.execute(line).await;
            let exit = result.exit;
            steps.push(ScriptStep {
                line: line.to_string(),
                result,
            });
            if exit {
                debug!(line, "script requested exit");
                break;
            }
        }
        steps
    }
}
