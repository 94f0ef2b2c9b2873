//! envtree - load a `.env` file and settings directory, then query them.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging to stderr.
//! - Print command output and exit with a structured code.
//!
//! Does NOT handle:
//! - Parsing or lookups (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
