//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` over a root directory.
//! - Apply the env file, then merge sections into a `Settings` tree.
//!
//! Does NOT handle:
//! - Line parsing (see `parser`) or file-format parsing (see `sections.rs`).
//!
//! Invariants / Assumptions:
//! - `load()` targets the process environment; `load_into()` targets any
//!   injected `EnvStore`.
//! - A missing or unreadable env file fails the load before any section is
//!   read.
//! - Sections are merged by name in the order the section loader returns
//!   them; a later section replaces an earlier one with the same name.

use std::path::{Path, PathBuf};

use super::dotenv::apply_env_file;
use super::error::SettingsError;
use super::sections::{DirSectionLoader, SectionLoader, expand_placeholders};
use crate::constants::{DEFAULT_ENV_FILE, DEFAULT_SECTIONS_DIR};
use crate::settings::Settings;
use crate::store::{EnvStore, ProcessEnv};

/// Loads an env file and a section directory from one root.
#[derive(Debug, Clone)]
pub struct SettingsLoader<L = DirSectionLoader> {
    root: PathBuf,
    sections_dir: String,
    env_file: String,
    section_loader: L,
}

impl SettingsLoader {
    /// Create a loader for `root` with the default file names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sections_dir: DEFAULT_SECTIONS_DIR.to_string(),
            env_file: DEFAULT_ENV_FILE.to_string(),
            section_loader: DirSectionLoader,
        }
    }
}

impl<L: SectionLoader> SettingsLoader<L> {
    /// Set the section directory name, relative to the root.
    pub fn with_sections_dir(mut self, name: impl Into<String>) -> Self {
        self.sections_dir = name.into();
        self
    }

    /// Set the env file name, relative to the root.
    pub fn with_env_file(mut self, name: impl Into<String>) -> Self {
        self.env_file = name.into();
        self
    }

    /// Replace the section loader (e.g. with one that supplies sections
    /// from memory).
    pub fn with_section_loader<M: SectionLoader>(self, section_loader: M) -> SettingsLoader<M> {
        SettingsLoader {
            root: self.root,
            sections_dir: self.sections_dir,
            env_file: self.env_file,
            section_loader,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env_file_path(&self) -> PathBuf {
        self.root.join(&self.env_file)
    }

    pub fn sections_path(&self) -> PathBuf {
        self.root.join(&self.sections_dir)
    }

    /// Load into the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::EnvFileUnreadable` if the env file cannot be
    /// read.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let mut store = ProcessEnv::new();
        self.load_into(&mut store)
    }

    /// Load into an injected store.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::EnvFileUnreadable` if the env file cannot be
    /// read.
    pub fn load_into<S: EnvStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<Settings, SettingsError> {
        let env_path = self.env_file_path();
        let defined = apply_env_file(&env_path, store)?;
        tracing::debug!(
            path = %env_path.display(),
            count = defined.len(),
            "Applied env file"
        );

        let mut settings = Settings::with_defined_vars(defined);
        for (name, value) in self.section_loader.load_sections(&self.sections_path()) {
            let value = expand_placeholders(value, &*store);
            if settings.insert_section(name.clone(), value).is_some() {
                tracing::debug!(section = %name, "Section replaced by later file");
            }
        }

        Ok(settings)
    }
}
