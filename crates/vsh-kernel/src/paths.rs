//! XDG Base Directory paths for vsh.
//!
//! | Purpose | XDG Variable | Default | vsh Path |
//! |---------|--------------|---------|----------|
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/vsh/config.toml` |
//! | VFS root | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/vsh/root/` |
//! | History | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/vsh/history.txt` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/vsh` or falls back to `~/.config/vsh`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join("vsh")
}

/// Get the data directory.
///
/// Uses `$XDG_DATA_HOME/vsh` or falls back to `~/.local/share/vsh`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("vsh")
}

/// Default configuration file.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// VFS root used when configuration does not name one.
pub fn default_vfs_root() -> PathBuf {
    data_dir().join("root")
}

/// REPL line history.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

/// Fallback home directory when BaseDirs fails.
fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}
