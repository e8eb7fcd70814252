//! CLI command tests
//!
//! This module contains all tests for the CLI commands. Log files are
//! written to a tempdir and fed through the same loading path `main` uses.

use std::io::Write;
use std::path::PathBuf;

use mood2food_core::LogFormat;
use tempfile::TempDir;

use crate::commands::{self, truncate};

fn write_log(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn mood_json() -> &'static str {
    r#"[
        {"mood":"Stressed","intensity":7,"notes":"","timestamp":1700000000000},
        {"mood":"Stressed","intensity":8,"notes":"","timestamp":1700086400000},
        {"mood":"Happy","intensity":6,"notes":"","timestamp":1700172800000}
    ]"#
}

fn food_json() -> &'static str {
    r#"[
        {"name":"Oatmeal","category":"Grains & Starches","notes":"","timestamp":1},
        {"name":"Latte","category":"Beverages","notes":"","timestamp":2},
        {"name":"Sandwich","category":"Fast Food","notes":"","timestamp":3}
    ]"#
}

// ========== Format Resolution Tests ==========

#[test]
fn test_resolve_format_from_extension() {
    let path = PathBuf::from("moods.json");
    assert_eq!(
        commands::resolve_format(&path, None).unwrap(),
        LogFormat::Json
    );
}

#[test]
fn test_resolve_format_override_wins() {
    let path = PathBuf::from("moods.json");
    assert_eq!(
        commands::resolve_format(&path, Some("csv")).unwrap(),
        LogFormat::Csv
    );
}

#[test]
fn test_resolve_format_unknown_extension() {
    let path = PathBuf::from("moods.dat");
    let err = commands::resolve_format(&path, None).unwrap_err();
    assert!(err.to_string().contains("Cannot detect log format"));
}

// ========== Log Loading Tests ==========

#[test]
fn test_load_mood_log_json() {
    let dir = TempDir::new().unwrap();
    let path = write_log(&dir, "moods.json", mood_json());
    let log = commands::load_mood_log(&path, None).unwrap();
    assert_eq!(log.len(), 3);
}

#[test]
fn test_load_mood_log_missing_file() {
    let err = commands::load_mood_log(&PathBuf::from("/nonexistent/moods.json"), None)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to open"));
}

#[test]
fn test_load_mood_log_invalid_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        "moods.json",
        r#"[{"mood":"Calm","intensity":0,"notes":"","timestamp":1}]"#,
    );
    let err = commands::load_mood_log(&path, None).unwrap_err();
    assert!(format!("{:#}", err).contains("out of range"));
}

#[test]
fn test_load_food_log_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        &dir,
        "foods.csv",
        "name,category,notes,timestamp\nToast,Grains & Starches,,1\n",
    );
    let log = commands::load_food_log(&path, None).unwrap();
    assert_eq!(log.len(), 1);
}

// ========== Command Tests ==========

#[test]
fn test_cmd_insights_full_report() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(&dir, "moods.json", mood_json());
    let foods = write_log(&dir, "foods.json", food_json());

    assert!(commands::cmd_insights(&moods, &foods, None, false).is_ok());
    assert!(commands::cmd_insights(&moods, &foods, None, true).is_ok());
}

#[test]
fn test_cmd_insights_insufficient_data() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(
        &dir,
        "moods.json",
        r#"[{"mood":"Calm","intensity":4,"notes":"","timestamp":1}]"#,
    );
    let foods = write_log(&dir, "foods.json", food_json());

    // Below the threshold is a valid outcome, not an error.
    assert!(commands::cmd_insights(&moods, &foods, None, false).is_ok());
}

#[test]
fn test_cmd_frequent() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(&dir, "moods.json", mood_json());
    assert!(commands::cmd_frequent(&moods, None, false).is_ok());
}

#[test]
fn test_cmd_frequent_empty_log() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(&dir, "moods.json", "[]");
    assert!(commands::cmd_frequent(&moods, None, false).is_ok());
    assert!(commands::cmd_frequent(&moods, None, true).is_ok());
}

#[test]
fn test_cmd_recent() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(&dir, "moods.json", mood_json());
    assert!(commands::cmd_recent(&moods, 2, None, false).is_ok());
}

#[test]
fn test_cmd_recommend() {
    assert!(commands::cmd_recommend("Stressed", false).is_ok());
    assert!(commands::cmd_recommend("Anxious", true).is_ok());
    assert!(commands::cmd_recommend("", false).is_ok());
}

#[test]
fn test_cmd_validate() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(&dir, "moods.json", mood_json());
    let foods = write_log(&dir, "foods.json", food_json());

    assert!(commands::cmd_validate(Some(&moods), Some(&foods), None, false).is_ok());
    assert!(commands::cmd_validate(Some(&moods), None, None, true).is_ok());
    assert!(commands::cmd_validate(None, None, None, false).is_err());
}

#[test]
fn test_cmd_validate_bad_log() {
    let dir = TempDir::new().unwrap();
    let moods = write_log(&dir, "moods.json", "not json");
    assert!(commands::cmd_validate(Some(&moods), None, None, false).is_err());
}

#[test]
fn test_cmd_listings() {
    assert!(commands::cmd_moods(false).is_ok());
    assert!(commands::cmd_moods(true).is_ok());
    assert!(commands::cmd_categories(false).is_ok());
    assert!(commands::cmd_categories(true).is_ok());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a longer string", 10), "a longe...");
}
