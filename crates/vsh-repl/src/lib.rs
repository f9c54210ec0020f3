//! vsh REPL — terminal front-end for the vsh shell emulator.
//!
//! Startup order:
//!
//! 1. Load configuration (a broken config is reported, then defaults apply)
//! 2. Open the VFS root
//! 3. Run the startup script, if any, echoing each line as `$ <line>`
//! 4. Read commands interactively until `exit` or EOF

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::runtime::Runtime;
use tracing::warn;

use vsh_kernel::kernel::ScriptStep;
use vsh_kernel::{ExecResult, Kernel, ShellConfig, paths, script};

/// Command-line options. Flags override the config file.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "vsh", version, about = "A toy shell over a virtual filesystem")]
pub struct Cli {
    /// Config file (default: ~/.config/vsh/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Physical directory to use as the VFS root
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Script to run before the prompt
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

/// REPL state: the kernel plus the runtime that drives it.
pub struct Repl {
    runtime: Runtime,
    kernel: Kernel,
    user: String,
    host: String,
}

impl Repl {
    /// Create a REPL over the real directory at `root`.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build runtime")?;
        let kernel = Kernel::local(root)
            .with_context(|| format!("Failed to open VFS root {}", root.display()))?;

        Ok(Self {
            runtime,
            kernel,
            user: current_user(),
            host: current_host(),
        })
    }

    /// Open the REPL described by CLI flags and configuration.
    ///
    /// Returns the REPL, the startup script to run (if any), and warnings
    /// to show the user.
    pub fn from_cli(cli: &Cli) -> Result<(Self, Option<PathBuf>, Vec<String>)> {
        let mut warnings = Vec::new();

        let (config, config_err) = ShellConfig::load_or_default(cli.config.as_deref());
        if let Some(e) = config_err {
            warnings.push(format!("{e}; using defaults"));
        }

        let repl = match &cli.root {
            Some(root) => Self::new(root)?,
            None => match Self::new(config.vfs_root_or_default()) {
                Ok(repl) => repl,
                Err(e) => {
                    // The default root is created on first use; only a
                    // configured root that fails is worth reporting.
                    if config.vfs_root.is_some() {
                        warnings.push(format!("{e:#}; using default root"));
                    }
                    Self::open_default()?
                }
            },
        };

        let script = cli.script.clone().or(config.startup_script);
        Ok((repl, script, warnings))
    }

    /// Open the default VFS root, creating it on first use.
    fn open_default() -> Result<Self> {
        let root = paths::default_vfs_root();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create {}", root.display()))?;
        Self::new(root)
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> ExecResult {
        self.runtime.block_on(self.kernel.execute(line))
    }

    /// Run script lines, stopping early on `exit`.
    pub fn run_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<ScriptStep> {
        self.runtime.block_on(self.kernel.run_script(lines))
    }

    /// Prompt showing who, where, and the current virtual directory.
    pub fn prompt(&self) -> String {
        let cwd = self.runtime.block_on(self.kernel.cwd());
        format!("{}@{}:{}$ ", self.user, self.host, cwd)
    }

    /// Run a startup script file. Returns true if it asked to exit.
    ///
    /// A script that cannot be read is reported and skipped.
    pub fn run_startup_script(&mut self, path: &Path) -> bool {
        let lines = match script::load(path) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping startup script");
                eprintln!("vsh: cannot read startup script {}: {e}", path.display());
                return false;
            }
        };

        let steps = self.run_lines(&lines);
        for step in &steps {
            println!("$ {}", step.line);
            print_result(&step.result);
        }
        steps.last().is_some_and(|step| step.result.exit)
    }
}

/// Print a result the way the console shows it.
pub fn print_result(result: &ExecResult) {
    if let Some(text) = format_result(result) {
        if result.ok() {
            println!("{text}");
        } else {
            eprintln!("{text}");
        }
    }
}

/// Text to display for a result, or `None` when there is nothing to show.
pub fn format_result(result: &ExecResult) -> Option<String> {
    let text = result.rendered();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn current_user() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "user".to_string())
}

fn current_host() -> String {
    std::fs::read_to_string("/etc/hostname")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("HOSTNAME").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "localhost".to_string())
}

/// Run the REPL.
pub fn run(cli: Cli) -> Result<()> {
    let (mut repl, startup_script, warnings) = Repl::from_cli(&cli)?;
    for warning in &warnings {
        eprintln!("vsh: {warning}");
    }

    if let Some(path) = startup_script {
        if repl.run_startup_script(&path) {
            return Ok(());
        }
    }

    println!("Type a command and press Enter...\n");

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history_path = paths::history_file();
    // Explicitly ignored: no history yet on first run
    let _ = rl.load_history(&history_path);

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                let result = repl.process_line(&line);
                print_result(&result);
                if result.exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = rl.save_history(&history_path) {
        warn!(error = %e, "failed to save history");
    }

    Ok(())
}
