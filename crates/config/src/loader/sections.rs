//! Section file discovery and parsing.
//!
//! Responsibilities:
//! - Enumerate a directory for `<name>.<ext>` section files.
//! - Parse each file into a `ConfigValue` with the format its extension names.
//! - Resolve `${VAR}` placeholders in string values.
//!
//! Does NOT handle:
//! - Merging sections into the tree (see `builder.rs`).
//!
//! Invariants:
//! - Section names match `[A-Za-z0-9_-]+` exactly; anything else is ignored.
//! - Files are returned in file-name order, so for a repeated section name
//!   the last file in that order wins once merged.
//! - A missing directory yields no sections; a broken file is skipped with a
//!   warning.

use std::path::Path;

use crate::constants::SECTION_EXTENSIONS;
use crate::parser::whole_reference;
use crate::store::{EnvStore, env_in};
use crate::value::ConfigValue;

/// Supplies named, already-parsed sections from a directory.
pub trait SectionLoader {
    fn load_sections(&self, directory: &Path) -> Vec<(String, ConfigValue)>;
}

/// Reads JSON, YAML and TOML section files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirSectionLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionFormat {
    Json,
    Yaml,
    Toml,
}

impl SectionFormat {
    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(SectionFormat::Json),
            "yaml" | "yml" => Some(SectionFormat::Yaml),
            "toml" => Some(SectionFormat::Toml),
            _ => None,
        }
    }

    fn parse(self, contents: &str) -> Result<ConfigValue, String> {
        match self {
            SectionFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            SectionFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            SectionFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Split `file_name` into a section name and format, if it names a section.
fn section_file(file_name: &str) -> Option<(&str, SectionFormat)> {
    let (name, ext) = file_name.split_once('.')?;
    let valid_name = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid_name || !SECTION_EXTENSIONS.contains(&ext) {
        return None;
    }
    SectionFormat::from_extension(ext).map(|format| (name, format))
}

impl SectionLoader for DirSectionLoader {
    fn load_sections(&self, directory: &Path) -> Vec<(String, ConfigValue)> {
        let entries = match std::fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    path = %directory.display(),
                    error = %e,
                    "Section directory not readable, loading no sections"
                );
                return Vec::new();
            }
        };

        let mut files: Vec<_> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        files.sort();

        let mut sections = Vec::new();
        for file_name in &files {
            let Some((name, format)) = section_file(file_name) else {
                continue;
            };
            let path = directory.join(file_name);
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|contents| format.parse(&contents));
            match parsed {
                Ok(value) => {
                    tracing::debug!(section = name, path = %path.display(), "Loaded section");
                    sections.push((name.to_string(), value));
                }
                Err(error) => {
                    tracing::warn!(
                        section = name,
                        path = %path.display(),
                        error = %error,
                        "Failed to load section file, skipping"
                    );
                }
            }
        }

        sections
    }
}

/// Resolve environment placeholders in every string of `value`.
///
/// Only a string that is exactly one `${NAME}` is a placeholder; it takes the
/// variable's typed value (`true`/`false` become booleans, undefined becomes
/// `Null`). Every other string, and every mapping key, is kept as written.
pub(crate) fn expand_placeholders<S: EnvStore + ?Sized>(
    value: ConfigValue,
    store: &S,
) -> ConfigValue {
    match value {
        ConfigValue::String(s) => {
            if let Some(name) = whole_reference(&s) {
                return env_in(store, name).unwrap_or(ConfigValue::Null);
            }
            ConfigValue::String(s)
        }
        ConfigValue::Sequence(items) => ConfigValue::Sequence(
            items
                .into_iter()
                .map(|item| expand_placeholders(item, store))
                .collect(),
        ),
        ConfigValue::Mapping(map) => ConfigValue::Mapping(
            map.into_iter()
                .map(|(key, item)| (key, expand_placeholders(item, store)))
                .collect(),
        ),
        scalar => scalar,
    }
}
