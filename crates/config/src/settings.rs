//! The loaded configuration tree.
//!
//! Responsibilities:
//! - Hold sections by name and answer dot-path queries over them.
//! - Remember which variables the env file defined.
//!
//! Does NOT handle:
//! - Loading (see `loader`).
//!
//! Invariants:
//! - Reads never mutate the tree and never fail.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::constants::PATH_SEPARATOR;
use crate::loader::{SettingsError, SettingsLoader};
use crate::resolve::resolve;
use crate::value::ConfigValue;

/// Sections keyed by name, queried with dot paths such as `app.version`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    sections: BTreeMap<String, ConfigValue>,
    defined_vars: Vec<String>,
}

impl Settings {
    /// Load `root` with default file names into the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::EnvFileUnreadable` if `<root>/.env` cannot be
    /// read.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        SettingsLoader::new(root).load()
    }

    /// Build settings directly from named sections.
    pub fn from_sections<I, K>(sections: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let mut settings = Self::default();
        for (name, value) in sections {
            settings.insert_section(name.into(), value);
        }
        settings
    }

    pub(crate) fn with_defined_vars(defined_vars: Vec<String>) -> Self {
        Self {
            sections: BTreeMap::new(),
            defined_vars,
        }
    }

    /// Insert or replace a section, returning the replaced value.
    pub(crate) fn insert_section(
        &mut self,
        name: String,
        value: ConfigValue,
    ) -> Option<ConfigValue> {
        self.sections.insert(name, value)
    }

    /// Resolve a dot path; `None` when any segment is absent.
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        match path.split_once(PATH_SEPARATOR) {
            Some((section, rest)) => resolve(self.sections.get(section)?, rest),
            None => self.sections.get(path).filter(|value| !value.is_null()),
        }
    }

    /// Resolve a dot path, falling back to `default`.
    pub fn get_or(&self, path: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get(path).cloned().unwrap_or_else(|| default.into())
    }

    pub fn section(&self, name: &str) -> Option<&ConfigValue> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> &BTreeMap<String, ConfigValue> {
        &self.sections
    }

    /// Variables the env file defined during load, in file order.
    pub fn defined_vars(&self) -> &[String] {
        &self.defined_vars
    }

    /// The whole tree as one mapping.
    pub fn to_value(&self) -> ConfigValue {
        ConfigValue::Mapping(self.sections.clone())
    }
}
