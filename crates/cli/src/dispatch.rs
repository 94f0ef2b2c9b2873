//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load settings from the root the CLI names.
//! - Route parsed CLI arguments to the matching command and render output.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Process exit codes (see `error` module).
//!
//! Invariants:
//! - Every command loads first; a load failure is reported before any lookup.
//! - Commands return their output instead of printing it.

use anyhow::{Context, Result};
use envtree_config::{ConfigValue, EnvStore, ProcessEnv, Settings, SettingsLoader, env_in};

use crate::args::{Cli, Commands};
use crate::error::CliError;
use crate::formatters::format_value;

/// Load settings into the process environment as the CLI options describe.
fn load(cli: &Cli, store: &mut ProcessEnv) -> Result<Settings> {
    let loader = SettingsLoader::new(&cli.root)
        .with_sections_dir(cli.settings_dir.as_str())
        .with_env_file(cli.env_file.as_str());
    tracing::debug!(
        root = %loader.root().display(),
        env_file = %loader.env_file_path().display(),
        sections = %loader.sections_path().display(),
        "Loading settings"
    );
    loader
        .load_into(store)
        .with_context(|| format!("Failed to load settings from {}", cli.root.display()))
}

/// Run the parsed command and return what should be printed.
pub(crate) fn run_command(cli: Cli) -> Result<String> {
    let mut store = ProcessEnv::new();
    let settings = load(&cli, &mut store)?;

    match &cli.command {
        Commands::Get { path, default } => {
            let value = match (settings.get(path), default) {
                (Some(value), _) => value.clone(),
                (None, Some(default)) => ConfigValue::from(default.as_str()),
                (None, None) => return Err(CliError::SettingNotFound(path.clone()).into()),
            };
            format_value(&value, cli.output)
        }
        Commands::Env { name } => {
            let value = env_in(&store, name)
                .ok_or_else(|| CliError::VariableNotFound(name.clone()))?;
            format_value(&value, cli.output)
        }
        Commands::Dump => format_value(&settings.to_value(), cli.output),
        Commands::Vars => Ok(settings
            .defined_vars()
            .iter()
            .map(|name| format!("{}={}", name, store.get(name).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
