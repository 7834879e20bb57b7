#![forbid(unsafe_code)]

//! # chatfmt
//!
//! Lays out formatted chat text for the chat box.
//!
//! ## Usage
//!
//! ```bash
//! chatfmt motd.txt                    # Wrap a file
//! chatfmt --align center motd.txt     # Center every line
//! cat motd.txt | chatfmt --indent 2   # Wrap stdin with an indent
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use chatfmt::{Cli, build_layout, run};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = build_layout(&cli)?;
    let stdout = io::stdout().lock();

    match &cli.input {
        Some(path) if !cli.reads_stdin() => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(&cli, &layout, BufReader::new(file), stdout)
        }
        _ => run(&cli, &layout, io::stdin().lock(), stdout),
    }
}
