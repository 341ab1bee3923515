//! Integration tests for stored-record migration.
//!
//! Old records found on disk are rebuilt against the current schema on
//! load: known keys carry over, unknown and mistyped ones drop out, and
//! the result is written back under the current version.

use accesspanel::prefs::{FileBackend, PreferenceStore, SettingKey, SettingValue, STORAGE_KEY};
use serde_json::Value;
use std::path::Path;

fn write_stored(dir: &Path, contents: &str) {
    std::fs::write(dir.join(format!("{STORAGE_KEY}.json")), contents).unwrap();
}

fn read_stored(dir: &Path) -> Value {
    let raw = std::fs::read_to_string(dir.join(format!("{STORAGE_KEY}.json"))).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_v1_record_migrates_on_load() {
    let dir = tempfile::tempdir().unwrap();
    write_stored(
        dir.path(),
        r#"{
            "version": 1,
            "textScale": 140,
            "lineHeight": 1.8,
            "readingGuide": true,
            "highContrast": true
        }"#,
    );

    let store = PreferenceStore::new(FileBackend::with_dir(dir.path()));

    assert_eq!(store.get(SettingKey::TextScale), SettingValue::Scalar(140.0));
    assert_eq!(store.get(SettingKey::LineHeight), SettingValue::Scalar(1.8));
    assert_eq!(
        store.get(SettingKey::ReadingGuide),
        SettingValue::Toggle(true)
    );
    assert_eq!(
        store.get(SettingKey::HighContrast),
        SettingValue::Toggle(true)
    );

    // The migrated record is already on disk under the new version.
    let json = read_stored(dir.path());
    assert_eq!(json["version"], "2");
    assert_eq!(json["textScale"], 140.0);
}

#[test]
fn test_unknown_keys_do_not_survive_migration() {
    let dir = tempfile::tempdir().unwrap();
    write_stored(
        dir.path(),
        r#"{
            "version": 1,
            "textScale": 120,
            "cursorSize": "extra-large",
            "colorTheme": "sepia",
            "ttsVoice": "en-GB-standard-A"
        }"#,
    );

    let _store = PreferenceStore::new(FileBackend::with_dir(dir.path()));

    let json = read_stored(dir.path());
    assert_eq!(json["textScale"], 120.0);
    assert!(json.get("cursorSize").is_none());
    assert!(json.get("colorTheme").is_none());
    assert!(json.get("ttsVoice").is_none());
}

#[test]
fn test_mistyped_values_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_stored(
        dir.path(),
        r#"{
            "version": 1,
            "textScale": "big",
            "readingMask": "yes",
            "hideImages": true
        }"#,
    );

    let store = PreferenceStore::new(FileBackend::with_dir(dir.path()));

    assert_eq!(store.get(SettingKey::TextScale), SettingValue::Scalar(100.0));
    assert_eq!(
        store.get(SettingKey::ReadingMask),
        SettingValue::Toggle(false)
    );
    assert_eq!(store.get(SettingKey::HideImages), SettingValue::Toggle(true));
}

#[test]
fn test_migrated_values_are_clamped_and_exclusive() {
    let dir = tempfile::tempdir().unwrap();
    write_stored(
        dir.path(),
        r#"{
            "version": 1,
            "letterSpacing": 99,
            "highContrast": true,
            "darkContrast": true,
            "invertColors": true
        }"#,
    );

    let store = PreferenceStore::new(FileBackend::with_dir(dir.path()));

    assert_eq!(
        store.get(SettingKey::LetterSpacing),
        SettingValue::Scalar(10.0)
    );
    assert_eq!(
        store.get(SettingKey::HighContrast),
        SettingValue::Toggle(true)
    );
    assert_eq!(
        store.get(SettingKey::DarkContrast),
        SettingValue::Toggle(false)
    );
    assert_eq!(
        store.get(SettingKey::InvertColors),
        SettingValue::Toggle(false)
    );
}

#[test]
fn test_active_profile_marker_carries_over() {
    let dir = tempfile::tempdir().unwrap();
    write_stored(
        dir.path(),
        r#"{"version":1,"textScale":150,"highContrast":true,"activeProfile":"low-vision"}"#,
    );

    let store = PreferenceStore::new(FileBackend::with_dir(dir.path()));
    assert_eq!(store.active_profile(), Some("low-vision"));
}

#[test]
fn test_future_version_is_treated_as_migration_input() {
    let dir = tempfile::tempdir().unwrap();
    write_stored(
        dir.path(),
        r#"{"version":"9","textScale":130,"unknownFutureKey":[1,2,3]}"#,
    );

    let store = PreferenceStore::new(FileBackend::with_dir(dir.path()));

    assert_eq!(store.get(SettingKey::TextScale), SettingValue::Scalar(130.0));
    let json = read_stored(dir.path());
    assert_eq!(json["version"], "2");
    assert!(json.get("unknownFutureKey").is_none());
}
