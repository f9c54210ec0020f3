//! Local filesystem backend.
//!
//! Serves physical paths under a real directory, refusing anything whose
//! canonical form escapes that directory.

use super::traits::{DirEntry, DirEntryKind, Filesystem};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem backend anchored at `root`.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a backend rooted at `root`.
    ///
    /// The root must exist and be a directory. It is canonicalized once here
    /// so containment checks compare like with like.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("VFS root is not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    /// Canonicalize `path` and verify it stays under the root.
    ///
    /// Fails with `NotFound` for missing paths and `PermissionDenied` for
    /// paths that leave the root, including through symlinks.
    async fn confine(&self, path: &Path) -> io::Result<PathBuf> {
        let canonical = fs::canonicalize(path).await?;
        if !canonical.starts_with(&self.root) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!(
                    "path escapes root: {} is not under {}",
                    canonical.display(),
                    self.root.display()
                ),
            ));
        }
        Ok(canonical)
    }

    fn kind_of(metadata: &std::fs::Metadata) -> DirEntryKind {
        if metadata.is_dir() {
            DirEntryKind::Directory
        } else {
            DirEntryKind::File
        }
    }
}

#[async_trait]
impl Filesystem for LocalFs {
    fn root(&self) -> &Path {
        &self.root
    }

    async fn kind(&self, path: &Path) -> io::Result<DirEntryKind> {
        let full_path = self.confine(path).await?;
        let metadata = fs::metadata(&full_path).await?;
        Ok(Self::kind_of(&metadata))
    }

    async fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let full_path = self.confine(path).await?;
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&full_path).await?;

        while let Some(entry) = dir.next_entry().await? {
            // Classify the same way `cd` would: a link to a directory under
            // the root lists as a directory, while a dangling link or one
            // that escapes the root lists as a plain entry.
            let kind = self
                .kind(&entry.path())
                .await
                .unwrap_or(DirEntryKind::File);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        Ok(entries)
    }
}
