// Integration tests for loading widget settings from disk

use std::fs;
use tempfile::TempDir;
use year_progress::models::settings::{ProgressRefresh, Settings};
use year_progress::services::settings::{load_settings_or_default, SettingsError, SettingsService};

#[test]
fn test_settings_file_is_read() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "theme = \"light\"\nprogress_refresh = \"every_tick\"\n")
        .expect("Failed to write settings");

    let service = SettingsService::with_path(&path);
    let settings = service.load().expect("Failed to load settings");

    assert_eq!(settings.theme, "light");
    assert_eq!(settings.progress_refresh, ProgressRefresh::EveryTick);
    assert_eq!(settings.window_width, Settings::default().window_width);
    assert_eq!(service.path(), Some(path.as_path()));
}

#[test]
fn test_unreadable_settings_fall_back() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // A directory where the file should be cannot be read as text
    let path = dir.path().join("settings.toml");
    fs::create_dir(&path).expect("Failed to create directory");

    let service = SettingsService::with_path(&path);
    assert!(matches!(service.load(), Err(SettingsError::Io { .. })));
    assert_eq!(load_settings_or_default(&service), Settings::default());
}

#[test]
fn test_small_window_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "window_width = 300.0\n").expect("Failed to write settings");

    let err = SettingsService::with_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("Window width"));
}
