//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define the error returned when a load cannot proceed.
//!
//! Does NOT handle:
//! - Malformed env lines, duplicate variables, missing section directories or
//!   broken section files: those are tolerated and only logged.
//!
//! Invariants:
//! - Errors name the file and its directory, never the file's contents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The env file is missing, unreadable, or not valid UTF-8.
    #[error("Load error: '{file}' file in folder '{}' is not readable", .dir.display())]
    EnvFileUnreadable {
        file: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SettingsError {
    pub(crate) fn env_file_unreadable(path: &std::path::Path, source: std::io::Error) -> Self {
        SettingsError::EnvFileUnreadable {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            dir: path.parent().map(PathBuf::from).unwrap_or_default(),
            source,
        }
    }
}
