//! End-to-end loads of the fixture root.
//!
//! Responsibilities:
//! - Test the composed tree built from `.env` plus `settings/`.
//! - Test first-writer-wins against the real process environment.
//! - Test that repeated loads produce the same tree.

use serial_test::serial;

use super::{env_lock, fixture_root};
use crate::loader::builder::SettingsLoader;
use crate::settings::Settings;
use crate::store::{EnvStore, MemoryEnv, env, env_in};
use crate::value::ConfigValue;

const FIXTURE_VARS: [&str; 7] = [
    "APP_NAME",
    "APP_BOOL",
    "APP_DESC",
    "APP_GREETING",
    "APP_LITERAL",
    "DB_HOST",
    "DB_PORT",
];

fn unset_fixture_vars() -> Vec<(&'static str, Option<&'static str>)> {
    FIXTURE_VARS.iter().map(|name| (*name, None)).collect()
}

#[test]
fn test_fixture_tree() {
    let mut store = MemoryEnv::new();

    let settings = SettingsLoader::new(fixture_root())
        .load_into(&mut store)
        .unwrap();

    assert_eq!(settings.get("app.name"), Some(&ConfigValue::from("Test")));
    assert_eq!(
        settings.get("app.values.quoted"),
        Some(&ConfigValue::from(
            "Quoted value as it has spaces and special (áéíóúñ) characters"
        ))
    );
    assert_eq!(settings.get("app.values.boolean"), Some(&ConfigValue::Bool(true)));
    assert_eq!(
        settings.get("app.values.withVar"),
        Some(&ConfigValue::from("This is a Test"))
    );
    assert_eq!(
        settings.get("app.values.literal"),
        Some(&ConfigValue::from("This is a ${APP_NAME}"))
    );
    assert_eq!(
        settings.get("database.connections.0.host"),
        Some(&ConfigValue::from("localhost"))
    );
    assert_eq!(
        settings.get("database.connections.1.host"),
        Some(&ConfigValue::from("replica.${DB_HOST}"))
    );
    assert_eq!(settings.get("cache.prefix.key"), Some(&ConfigValue::from("app:")));
    assert_eq!(settings.get_or("app.missing.key", "D"), ConfigValue::from("D"));
    assert!(settings.section("notes").is_none());
}

#[test]
fn test_fixture_env_values() {
    let mut store = MemoryEnv::new();

    let settings = SettingsLoader::new(fixture_root())
        .load_into(&mut store)
        .unwrap();

    assert_eq!(store.get("APP_NAME").as_deref(), Some("Test"));
    assert_eq!(store.get("DB_HOST").as_deref(), Some("localhost"));
    assert_eq!(store.get("DB_PORT").as_deref(), Some("5432"));
    assert_eq!(store.get("APP_BOOL").as_deref(), Some("true"));
    assert_eq!(env_in(&store, "APP_BOOL"), Some(ConfigValue::Bool(true)));
    assert_eq!(settings.defined_vars().len(), FIXTURE_VARS.len());
    assert!(!store.contains("this"));
}

#[test]
fn test_load_is_repeatable() {
    let loader = SettingsLoader::new(fixture_root());

    let first = loader.load_into(&mut MemoryEnv::new()).unwrap();
    let second = loader.load_into(&mut MemoryEnv::new()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_variable_is_not_overwritten() {
    let mut store = MemoryEnv::from_vars([("APP_NAME", "FromHost")]);

    let settings = SettingsLoader::new(fixture_root())
        .load_into(&mut store)
        .unwrap();

    assert_eq!(store.get("APP_NAME").as_deref(), Some("FromHost"));
    // Later definitions expand against the surviving value.
    assert_eq!(
        settings.get("app.values.withVar"),
        Some(&ConfigValue::from("This is a FromHost"))
    );
}

#[test]
#[serial]
fn test_process_environment_load() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(unset_fixture_vars(), || {
        let settings = Settings::load(fixture_root()).unwrap();

        assert_eq!(std::env::var("APP_NAME").as_deref(), Ok("Test"));
        assert_eq!(env("APP_BOOL"), Some(ConfigValue::Bool(true)));
        assert_eq!(settings.get("app.name"), Some(&ConfigValue::from("Test")));
    });
}

#[test]
#[serial]
fn test_process_environment_value_persists() {
    let _lock = env_lock().lock().unwrap();

    let mut vars = unset_fixture_vars();
    vars[0] = ("APP_NAME", Some("FromSystem"));
    temp_env::with_vars(vars, || {
        let settings = Settings::load(fixture_root()).unwrap();

        assert_eq!(std::env::var("APP_NAME").as_deref(), Ok("FromSystem"));
        assert_eq!(settings.get("app.name"), Some(&ConfigValue::from("FromSystem")));
        assert!(!settings.defined_vars().contains(&"APP_NAME".to_string()));
    });
}

#[test]
#[serial]
fn test_refused_process_write_is_not_reported_as_defined() {
    let _lock = env_lock().lock().unwrap();
    let key = "_ENVTREE_TEST_NUL_LINE";
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".env"),
        format!("{key}=\"a\0b\"\n_ENVTREE_TEST_AFTER_NUL=ok\n"),
    )
    .unwrap();

    temp_env::with_vars([(key, None::<&str>), ("_ENVTREE_TEST_AFTER_NUL", None)], || {
        let settings = Settings::load(temp_dir.path()).unwrap();

        assert_eq!(std::env::var_os(key), None);
        assert_eq!(settings.defined_vars(), ["_ENVTREE_TEST_AFTER_NUL".to_string()]);
    });
}
