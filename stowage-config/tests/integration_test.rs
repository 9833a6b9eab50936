//! Integration tests for stowage-config

use std::fs;
use stowage_config::*;

#[test]
fn test_settings_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stowage.json");
    fs::write(&path, r#"{"backend": "file", "path": "/srv/stowage"}"#).unwrap();

    let settings = StoreSettings::from_file(&path).unwrap();
    assert_eq!(settings, StoreSettings::file("/srv/stowage"));
}

#[test]
fn test_settings_from_toml_store_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stowage.toml");
    fs::write(
        &path,
        r#"
        [store]
        backend = "file"
        path = "settings"
        "#,
    )
    .unwrap();

    let settings = StoreSettings::from_file(&path).unwrap();
    assert_eq!(settings, StoreSettings::file("settings"));
}

#[test]
fn test_settings_from_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.env");
    fs::write(&path, "STORE_BACKEND=memory\n").unwrap();

    let settings = StoreSettings::from_file(&path).unwrap();
    assert_eq!(settings, StoreSettings::memory());
}

#[test]
fn test_settings_file_rejects_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("missing-path.json");
    fs::write(&path, r#"{"backend": "file"}"#).unwrap();
    assert!(matches!(
        StoreSettings::from_file(&path),
        Err(ConfigError::ValidationError(_))
    ));

    let path = dir.path().join("bad-backend.json");
    fs::write(&path, r#"{"backend": "redis"}"#).unwrap();
    assert!(matches!(
        StoreSettings::from_file(&path),
        Err(ConfigError::DeserializationError(_))
    ));

    let path = dir.path().join("settings.yaml");
    fs::write(&path, "backend: memory").unwrap();
    assert!(matches!(
        StoreSettings::from_file(&path),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError("stowage.toml".to_string());
    let display = format!("{}", err);
    assert!(display.contains("stowage.toml"));
}
