//! Shell configuration.
//!
//! Configuration is loaded from `~/.config/vsh/config.toml`:
//!
//! ```toml
//! vfs_root = "/srv/vsh"
//! startup_script = "startup.vsh"
//! ```
//!
//! Relative paths are taken from the directory holding the config file.
//! A broken config never stops the shell: the error is reported and the
//! defaults are used instead.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::paths;

/// Configuration for a shell session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Physical directory the VFS is anchored at.
    #[serde(default)]
    pub vfs_root: Option<PathBuf>,

    /// Script run before the interactive prompt.
    #[serde(default)]
    pub startup_script: Option<PathBuf>,
}

impl ShellConfig {
    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Load configuration, falling back to defaults on any problem.
    ///
    /// `path` defaults to [`paths::config_file`]; only that implicit file may
    /// be absent without complaint. An explicitly named file that is missing,
    /// unreadable, or malformed is logged and returned alongside the default
    /// configuration so the caller can show it.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let explicit = path.is_some();
        let path = path.map_or_else(paths::config_file, Path::to_path_buf);

        if !explicit && !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return (Self::default(), None);
        }

        match Self::load_from(&path) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!(error = %e, "using default configuration");
                (Self::default(), Some(e))
            }
        }
    }

    /// The configured VFS root, or the default location.
    pub fn vfs_root_or_default(&self) -> PathBuf {
        self.vfs_root.clone().unwrap_or_else(paths::default_vfs_root)
    }

    fn relative_to(self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            vfs_root: self.vfs_root.map(anchor),
            startup_script: self.startup_script.map(anchor),
        }
    }
}
