//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test env file loading from disk, including failure on unreadable files.
//! - Test section directory discovery and merge order.
//! - Test full loads against the fixture root and the process environment.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and
//!   `env_lock()`; everything else loads into a `MemoryEnv`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

pub mod load_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Root of the checked-in fixture application.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/basic")
}
