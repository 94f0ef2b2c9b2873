//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use envtree_config::constants::{DEFAULT_ENV_FILE, DEFAULT_SECTIONS_DIR};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "envtree")]
#[command(about = "Load a .env file and settings directory, then query values by dot path", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envtree get app.name\n  envtree --root ./site get database.connections.0.host -o json\n  envtree env APP_DEBUG\n  envtree dump -o yaml\n"
)]
pub struct Cli {
    /// Root directory containing the env file and settings directory
    #[arg(short, long, global = true, env = "ENVTREE_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Settings directory name, relative to the root
    #[arg(long, global = true, env = "ENVTREE_SETTINGS_DIR", default_value = DEFAULT_SECTIONS_DIR)]
    pub settings_dir: String,

    /// Env file name, relative to the root
    #[arg(long, global = true, env = "ENVTREE_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a dot path (e.g. app.version)
    Get {
        /// Dot-separated path into the settings tree
        path: String,

        /// Value to print when the path is not defined
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Print an environment variable after loading the env file
    Env {
        /// Variable name
        name: String,
    },

    /// Print the whole settings tree
    Dump,

    /// Print every variable the env file defined as NAME=value
    Vars,
}
