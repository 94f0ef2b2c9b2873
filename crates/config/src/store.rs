//! Environment stores.
//!
//! Responsibilities:
//! - Define the `EnvStore` seam the env-file loader reads from and writes to.
//! - Provide `ProcessEnv` (the real process environment) and `MemoryEnv`
//!   (an isolated map for hosts and tests).
//! - Implement first-writer-wins definition and the typed `env` helpers.
//!
//! Does NOT handle:
//! - Parsing env files (see `parser`).
//! - Any synchronization: callers serialize concurrent loads themselves.
//!
//! Invariants:
//! - `define` never overwrites a name the store already contains.
//! - The literal strings `true` and `false` read back as booleans through the
//!   `env` helpers and as strings through `EnvStore::get`.

use std::collections::HashMap;

use crate::value::ConfigValue;

/// Key-value storage for environment variables.
pub trait EnvStore {
    /// Read a variable, `None` if undefined.
    fn get(&self, name: &str) -> Option<String>;

    /// Whether the variable is defined anywhere this store can see.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Write a variable unconditionally.
    ///
    /// Returns `false` when the store refused the write.
    fn set(&mut self, name: &str, value: &str) -> bool;
}

/// The real process environment plus the application's own view of it.
///
/// Reads consult the variables this store defined first, then the process
/// environment. Writes go to both.
#[derive(Debug, Default)]
pub struct ProcessEnv {
    defined: HashMap<String, String>,
}

impl ProcessEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables written through this store, in no particular order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defined.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.defined
            .get(name)
            .cloned()
            .or_else(|| std::env::var(name).ok())
    }

    fn contains(&self, name: &str) -> bool {
        self.defined.contains_key(name) || std::env::var_os(name).is_some()
    }

    fn set(&mut self, name: &str, value: &str) -> bool {
        // set_var panics on these; env-file keys never contain them but values might.
        if name.is_empty() || name.contains(['=', '\0']) || value.contains('\0') {
            tracing::warn!(name, "Refusing to set environment variable with invalid characters");
            return false;
        }
        // SAFETY: loading is single-threaded and completes before the
        // environment is read concurrently.
        unsafe {
            std::env::set_var(name, value);
        }
        self.defined.insert(name.to_string(), value.to_string());
        true
    }
}

/// An in-memory store that never touches the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with a snapshot of the host environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn set(&mut self, name: &str, value: &str) -> bool {
        self.vars.insert(name.to_string(), value.to_string());
        true
    }
}

/// Define `name` unless the store already has it.
///
/// Returns whether the value was written.
pub fn define<S: EnvStore + ?Sized>(store: &mut S, name: &str, value: &str) -> bool {
    if store.contains(name) {
        tracing::trace!(name, "Variable already defined, keeping existing value");
        return false;
    }
    store.set(name, value)
}

/// Read `name` from `store`, coercing `true`/`false` to booleans.
pub fn env_in<S: EnvStore + ?Sized>(store: &S, name: &str) -> Option<ConfigValue> {
    store.get(name).map(|raw| match raw.as_str() {
        "true" => ConfigValue::Bool(true),
        "false" => ConfigValue::Bool(false),
        _ => ConfigValue::String(raw),
    })
}

/// Read `name` from the process environment, coercing `true`/`false`.
pub fn env(name: &str) -> Option<ConfigValue> {
    env_in(&ProcessEnv::new(), name)
}

/// Like [`env`], falling back to `default` when the variable is undefined.
pub fn env_or(name: &str, default: impl Into<ConfigValue>) -> ConfigValue {
    env(name).unwrap_or_else(|| default.into())
}
