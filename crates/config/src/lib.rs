//! Environment file and settings tree loading.
//!
//! This crate reads a `.env`-style file into an environment store, then
//! loads a directory of per-section files into a nested tree that can be
//! queried with dot-notation paths such as `app.version`.

pub mod constants;
mod loader;
pub mod parser;
mod resolve;
mod settings;
pub mod store;
mod value;

pub use loader::{DirSectionLoader, SectionLoader, SettingsError, SettingsLoader, apply_env_str};
pub use resolve::{resolve, resolve_or};
pub use settings::Settings;
pub use store::{EnvStore, MemoryEnv, ProcessEnv, define, env, env_in, env_or};
pub use value::ConfigValue;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
