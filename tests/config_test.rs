//! Tests for loading game configuration from TOML files.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use unvoid::GameConfig;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("unvoid.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"rows = 8
cols = 10
log_filter = "unvoid=debug"
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.rows(), 8);
    assert_eq!(*config.cols(), 10);
    assert_eq!(config.log_filter(), "unvoid=debug");
    assert_eq!(config.log_file(), Path::new("game.log"));
}

#[test]
fn test_missing_fields_take_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rows = 12\n");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.rows(), 12);
    assert_eq!(*config.cols(), 6);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_out_of_range_size_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rows = 4\ncols = 8\n");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("got 4x8"), "{}", err);
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rows = 8\ntheme = \"dark\"\n");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{}", err);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.toml");

    let err = GameConfig::discover(Some(missing.as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{}", err);
}

#[test]
fn test_error_records_location() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "rows = \"eight\"\n");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.file.ends_with("config.rs"), "{}", err.file);
    assert!(err.line > 0);
}
