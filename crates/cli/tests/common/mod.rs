//! Shared test utilities for envtree integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Locate the fixture application shared with the config crate.
//!
//! Invariants / Assumptions:
//! - Fixture variables and `ENVTREE_*` options are cleared from the child
//!   environment so host values never leak into results.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

const FIXTURE_VARS: &[&str] = &[
    "APP_NAME",
    "APP_BOOL",
    "APP_DESC",
    "APP_GREETING",
    "APP_LITERAL",
    "DB_HOST",
    "DB_PORT",
];

/// Returns a hermetic `envtree` command rooted at the fixture application.
pub fn envtree_cmd() -> Command {
    envtree_cmd_at(fixture_root())
}

/// Returns a hermetic `envtree` command rooted at `root`.
#[allow(dead_code)]
pub fn envtree_cmd_at(root: impl AsRef<Path>) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envtree");

    cmd.env_remove("ENVTREE_ROOT")
        .env_remove("ENVTREE_SETTINGS_DIR")
        .env_remove("ENVTREE_ENV_FILE")
        .env_remove("RUST_LOG");
    for name in FIXTURE_VARS {
        cmd.env_remove(name);
    }
    cmd.arg("--root").arg(root.as_ref());

    cmd
}

/// Root of the fixture application in `crates/config`.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config/tests/fixtures/basic")
}
