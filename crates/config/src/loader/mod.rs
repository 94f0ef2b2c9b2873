//! Settings loader for env files and section directories.
//!
//! Responsibilities:
//! - Apply an env file to an `EnvStore` (first writer wins).
//! - Enumerate a section directory and parse each section file.
//! - Provide the builder-pattern `SettingsLoader` that composes both steps.
//!
//! Does NOT handle:
//! - Line grammar, quoting, or expansion (see `parser`).
//! - Dot-path lookups (see `resolve.rs` and `settings.rs`).
//!
//! Invariants / Assumptions:
//! - The env file is applied before sections are read, so section
//!   placeholders see variables the env file defined.
//! - Only an unreadable env file fails a load.

mod builder;
mod dotenv;
mod error;
mod sections;

pub use builder::SettingsLoader;
pub use dotenv::apply_env_str;
pub use error::SettingsError;
pub use sections::{DirSectionLoader, SectionLoader};

#[cfg(test)]
mod tests;
