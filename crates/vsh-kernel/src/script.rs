//! Startup scripts: one command per line, `#` starts a comment line.

use std::io;
use std::path::Path;

/// Read a script file into executable lines.
pub fn load(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(lines(&content))
}

/// Split script text into executable lines.
///
/// Lines are trimmed; blank lines and lines starting with `#` are dropped.
pub fn lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
