//! Core VFS traits and types.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Kind of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryKind {
    File,
    Directory,
}

/// A directory entry as seen by `ls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name of the entry (not full path).
    pub name: String,
    /// Kind of entry.
    pub kind: DirEntryKind,
}

impl DirEntry {
    /// Name as `ls` prints it: directories carry a trailing `/`.
    pub fn display_name(&self) -> String {
        match self.kind {
            DirEntryKind::Directory => format!("{}/", self.name),
            DirEntryKind::File => self.name.clone(),
        }
    }
}

/// Read-only filesystem interface over physical paths.
///
/// Paths handed to a backend come from [`super::resolve`] and therefore
/// already sit under the VFS root; backends still refuse anything that
/// escapes it.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// The physical directory all virtual paths are anchored at.
    fn root(&self) -> &Path;

    /// Whether `path` is a file or a directory, following symlinks.
    async fn kind(&self, path: &Path) -> io::Result<DirEntryKind>;

    /// Immediate children of a directory, in no particular order.
    async fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}
