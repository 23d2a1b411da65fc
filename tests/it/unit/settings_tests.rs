//! Unit tests for settings loading and command line overrides.

use album_dashboard::settings::{Settings, SettingsOverrides};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "port": 9000, "sales_suffix": "" }"#).unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.port, 9000);
    assert_eq!(settings.sales_suffix, "");
    assert_eq!(settings.title, Settings::default().title);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_full_file_loads_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        title: "Chart Toppers".to_string(),
        open_browser: false,
        ..Settings::default()
    };

    std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_overrides_take_precedence() {
    let settings = Settings::default().apply_overrides(SettingsOverrides {
        data_path: Some(PathBuf::from("other.tsv")),
        bind_address: Some("0.0.0.0".to_string()),
        port: Some(0),
        no_open: true,
    });

    assert_eq!(settings.data_path, PathBuf::from("other.tsv"));
    assert_eq!(settings.socket_address(), "0.0.0.0:0");
    assert!(!settings.open_browser);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let settings = Settings::default().apply_overrides(SettingsOverrides::default());
    assert_eq!(settings, Settings::default());
}
