//! Virtual Filesystem (VFS) for vsh.
//!
//! The shell sees a namespace rooted at `/`. Every virtual path maps onto a
//! physical directory tree anchored at the VFS root:
//!
//! ```text
//! virtual            physical (root = /srv/vsh)
//! /                  /srv/vsh
//! /docs              /srv/vsh/docs
//! notes.txt (cwd /docs)  /srv/vsh/docs/notes.txt
//! ```
//!
//! - **VirtualPath**: a normalized location in the namespace
//! - **resolve**: maps a virtual path onto the physical tree
//! - **Filesystem**: metadata and listing over physical paths
//! - **LocalFs**: the real-disk backend, confined to the root

mod local;
mod path;
mod traits;

use std::path::{Path, PathBuf};

pub use local::LocalFs;
pub use path::VirtualPath;
pub use traits::{DirEntry, DirEntryKind, Filesystem};

/// Map `input` onto the physical tree under `vfs_root`.
///
/// Absolute inputs (leading `/`) are taken from the VFS root; anything else
/// is taken from `current_dir`. The join is purely textual: `.` and `..`
/// segments are passed through untouched and nothing is checked on disk.
pub fn resolve(vfs_root: &Path, current_dir: &VirtualPath, input: &str) -> PathBuf {
    if input.starts_with('/') {
        vfs_root.join(input.trim_start_matches('/'))
    } else {
        current_dir.to_physical(vfs_root).join(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_input_ignores_current_dir() {
        let cwd = VirtualPath::parse("/a/b");
        assert_eq!(
            resolve(Path::new("/srv/vsh"), &cwd, "/docs/x"),
            PathBuf::from("/srv/vsh/docs/x")
        );
    }

    #[test]
    fn relative_input_joins_current_dir() {
        let cwd = VirtualPath::parse("/a/b");
        assert_eq!(
            resolve(Path::new("/srv/vsh"), &cwd, "c"),
            PathBuf::from("/srv/vsh/a/b/c")
        );
    }

    #[test]
    fn root_input_is_the_anchor() {
        let cwd = VirtualPath::parse("/a");
        assert_eq!(resolve(Path::new("/srv/vsh"), &cwd, "/"), PathBuf::from("/srv/vsh"));
        assert_eq!(resolve(Path::new("/srv/vsh"), &cwd, "//x"), PathBuf::from("/srv/vsh/x"));
    }

    #[test]
    fn dot_segments_pass_through() {
        let cwd = VirtualPath::root();
        assert_eq!(
            resolve(Path::new("/srv/vsh"), &cwd, "../x"),
            PathBuf::from("/srv/vsh/../x")
        );
    }
}
