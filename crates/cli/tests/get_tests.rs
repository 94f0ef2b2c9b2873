//! Integration tests for `envtree get`, `env`, `dump` and `vars`.
//!
//! Invariants:
//! - All tests use the hermetic `envtree_cmd()` helper.

mod common;

use common::envtree_cmd;
use predicates::prelude::*;

#[test]
fn test_get_string_value() {
    envtree_cmd()
        .args(["get", "app.name"])
        .assert()
        .success()
        .stdout("Test\n");
}

#[test]
fn test_get_expanded_value() {
    envtree_cmd()
        .args(["get", "app.values.withVar"])
        .assert()
        .success()
        .stdout("This is a Test\n");
}

#[test]
fn test_get_boolean_value() {
    envtree_cmd()
        .args(["get", "app.values.boolean"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_get_subtree_as_json() {
    envtree_cmd()
        .args(["get", "database.connections.0", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"host\": \"localhost\""));
}

#[test]
fn test_get_missing_with_default() {
    envtree_cmd()
        .args(["get", "app.missing.key", "--default", "D"])
        .assert()
        .success()
        .stdout("D\n");
}

#[test]
fn test_host_variable_wins_over_env_file() {
    envtree_cmd()
        .env("APP_NAME", "FromHost")
        .args(["get", "app.name"])
        .assert()
        .success()
        .stdout("FromHost\n");
}

#[test]
fn test_env_command_coerces_booleans_in_json() {
    envtree_cmd()
        .args(["env", "APP_BOOL", "-o", "json"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_env_command_prints_raw_string() {
    envtree_cmd()
        .args(["env", "APP_LITERAL"])
        .assert()
        .success()
        .stdout("This is a ${APP_NAME}\n");
}

#[test]
fn test_dump_yaml_lists_sections() {
    envtree_cmd()
        .args(["dump", "-o", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app:"))
        .stdout(predicate::str::contains("cache:"))
        .stdout(predicate::str::contains("database:"))
        .stdout(predicate::str::contains("notes").not());
}

#[test]
fn test_vars_lists_defined_variables() {
    envtree_cmd()
        .arg("vars")
        .assert()
        .success()
        .stdout(predicate::str::contains("APP_NAME=Test"))
        .stdout(predicate::str::contains("DB_PORT=5432"));
}
