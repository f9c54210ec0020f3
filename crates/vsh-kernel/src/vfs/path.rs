//! Normalized virtual paths.

use std::fmt;
use std::path::{Path, PathBuf};

/// A location in the VFS namespace, always rooted at `/`.
///
/// Segments never contain `.` or `..` and are never empty. The root is the
/// empty segment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The VFS root, `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse `path` as an absolute virtual path, normalizing it.
    ///
    /// A missing leading `/` is tolerated; the result is rooted either way.
    pub fn parse(path: &str) -> Self {
        Self::root().join(path)
    }

    /// Compose `input` with `self` and collapse `.`/`..` lexically.
    ///
    /// Absolute inputs replace `self`. `..` at the root stays at the root.
    /// Nothing is checked on disk.
    pub fn join(&self, input: &str) -> Self {
        let mut segments = if input.starts_with('/') {
            Vec::new()
        } else {
            self.segments.clone()
        };

        for segment in input.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Physical location of this path under `vfs_root`.
    pub fn to_physical(&self, vfs_root: &Path) -> PathBuf {
        let mut physical = vfs_root.to_path_buf();
        physical.extend(&self.segments);
        physical
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
