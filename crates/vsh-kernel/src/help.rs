//! Help text for the builtin commands.

/// Usage line and description for each builtin, in display order.
pub const BUILTINS: &[(&str, &str)] = &[
    ("ls [path]", "List directory contents (directories end with /)"),
    ("cd [path]", "Change directory; with no path, return to /"),
    ("pwd", "Print the current directory"),
    ("help", "Show this help"),
    ("exit", "Leave the shell"),
];

/// Render the help listing, one builtin per line.
pub fn help_text() -> String {
    let width = BUILTINS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    BUILTINS
        .iter()
        .map(|(usage, description)| format!("{usage:<width$}  {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_builtin() {
        let text = help_text();
        for name in ["ls", "cd", "pwd", "help", "exit"] {
            assert!(
                text.lines().any(|line| line.starts_with(name)),
                "missing {name} in:\n{text}"
            );
        }
    }

    #[test]
    fn descriptions_are_aligned() {
        let text = help_text();
        let columns: Vec<_> = text
            .lines()
            .zip(BUILTINS)
            .map(|(line, (_, description))| line.find(description))
            .collect();
        assert_eq!(columns.len(), BUILTINS.len());
        assert!(columns.iter().all(|&c| c.is_some() && c == columns[0]));
        assert!(!text.ends_with('\n'));
    }
}
