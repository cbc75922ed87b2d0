//! Entry point for countgpt, a command-line token counter.
//!
//! This binary sets up logging, parses CLI arguments via [`cli`], and
//! exits with the status [`cli::run`] reports.

mod cli;
mod constants;
mod error;
mod models;
mod output;
mod report;
mod source;
mod tokens;
mod visualize;

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Runs the countgpt CLI.
///
/// Log output goes to stderr and is filtered by `RUST_LOG`, defaulting to
/// warnings only so stdout carries nothing but counts.
fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = cli::parse();
    cli::run(cli)
}
