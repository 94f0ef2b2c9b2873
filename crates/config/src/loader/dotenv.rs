//! Env file application.
//!
//! Responsibilities:
//! - Read the env file, failing loudly when it cannot be read.
//! - Feed each line through the parser and define the result in the store.
//!
//! Invariants:
//! - Values are processed against the store as it is when the line is
//!   reached, so later lines see earlier definitions.
//! - Names already in the store are never overwritten.
//! - Logs carry names and line numbers only, never values.

use std::path::Path;

use super::error::SettingsError;
use crate::parser::{parse_line, process_value};
use crate::store::{EnvStore, define};

/// Apply env-file `contents` to `store`.
///
/// Returns the names this call defined, in file order.
pub fn apply_env_str<S: EnvStore + ?Sized>(contents: &str, store: &mut S) -> Vec<String> {
    let mut defined = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let Some(parsed) = parse_line(line) else {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                tracing::trace!(line = index + 1, "Skipping line outside env grammar");
            }
            continue;
        };

        let value = process_value(parsed.raw_value, &*store);
        if define(store, parsed.name, &value) {
            tracing::debug!(name = parsed.name, line = index + 1, "Defined environment variable");
            defined.push(parsed.name.to_string());
        }
    }

    defined
}

/// Read and apply the env file at `path`.
pub(crate) fn apply_env_file<S: EnvStore + ?Sized>(
    path: &Path,
    store: &mut S,
) -> Result<Vec<String>, SettingsError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| SettingsError::env_file_unreadable(path, e))?;
    Ok(apply_env_str(&contents, store))
}
