//! Output formatters for CLI commands.
//!
//! Provides plain, JSON and YAML renderings of settings values.

use anyhow::Result;
use clap::ValueEnum;
use envtree_config::ConfigValue;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Strings raw, structured values as pretty JSON
    Plain,
    Json,
    Yaml,
}

/// Render one value.
pub fn format_value(value: &ConfigValue, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Plain if value.is_scalar() => value.to_string(),
        OutputFormat::Plain | OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    };
    Ok(rendered)
}
