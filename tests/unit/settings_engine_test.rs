//! Unit tests for the SettingsEngine public API.

use quickurl::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use quickurl::types::settings::AppSettings;
use serde_json::json;
use tempfile::TempDir;

fn engine() -> (SettingsEngine, TempDir) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("settings.json");
    (SettingsEngine::new(Some(path.to_string_lossy().to_string())), tmp)
}

#[test]
fn test_defaults() {
    let settings = AppSettings::default();
    assert_eq!(settings.storage.slot_key, "savedURLItems");
    assert_eq!(settings.storage.database_path, None);
    assert_eq!(settings.logging.level, "info");
    assert!(settings.menu.show_manage_item);
    assert!(settings.menu.show_quit_item);
}

#[test]
fn test_set_value_persists_and_creates_parent_dirs() {
    let (mut engine, _tmp) = engine();
    engine.load().unwrap();
    engine
        .set_value("storage.database_path", json!("/tmp/other.db"))
        .unwrap();
    engine.set_value("logging.level", json!("debug")).unwrap();

    let mut reloaded = SettingsEngine::new(Some(engine.get_config_path().to_string()));
    let loaded = reloaded.load().unwrap();
    assert_eq!(loaded.storage.database_path.as_deref(), Some("/tmp/other.db"));
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn test_reset_restores_defaults() {
    let (mut engine, _tmp) = engine();
    engine.set_value("menu.show_quit_item", json!(false)).unwrap();
    assert!(!engine.get_settings().menu.show_quit_item);
    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), AppSettings::default());
}

#[test]
fn test_empty_key_rejected() {
    let (mut engine, _tmp) = engine();
    assert!(engine.set_value("", json!(1)).is_err());
}

#[test]
fn test_partial_file_fills_missing_sections() {
    let (mut engine, _tmp) = engine();
    let path = std::path::PathBuf::from(engine.get_config_path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"logging":{"level":"warn"}}"#).unwrap();

    let loaded = engine.load().unwrap();
    assert_eq!(loaded.logging.level, "warn");
    assert_eq!(loaded.storage, AppSettings::default().storage);
    assert_eq!(loaded.menu, AppSettings::default().menu);
}
