//! vsh REPL entry point.
//!
//! Launch the interactive shell:
//! ```bash
//! cargo run -p vsh-repl -- --root ./sandbox
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vsh_repl::Cli;

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var). Logs go to stderr so
    // they never mix with command output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    vsh_repl::run(Cli::parse())
}
