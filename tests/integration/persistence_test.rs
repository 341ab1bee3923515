//! Integration tests for on-disk persistence.
//!
//! Runs the engine over the real file backend in a temp directory:
//! values written in one session come back in the next, and damaged or
//! alien files on disk never keep the engine from starting.

use accesspanel::adjust::{AccessProfile, Adjuster, EffectFlag, EffectVar, PageEffects};
use accesspanel::prefs::{FileBackend, PreferenceStore, SettingKey, SettingValue, STORAGE_KEY};
use serde_json::Value;
use std::path::Path;

fn engine(dir: &Path) -> Adjuster<FileBackend, PageEffects> {
    let store = PreferenceStore::new(FileBackend::with_dir(dir));
    let mut adjuster = Adjuster::new(store, PageEffects::new());
    adjuster.sync_all();
    adjuster
}

fn stored_file(dir: &Path) -> std::path::PathBuf {
    dir.join(format!("{STORAGE_KEY}.json"))
}

#[test]
fn test_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = engine(dir.path());
        session.set_text_scale(160.0);
        session.set_reading_mask(true);
        session.apply_profile(AccessProfile::ScreenReader);
    }

    let session = engine(dir.path());
    let prefs = session.prefs();
    assert_eq!(prefs.text_scale, 160.0);
    assert!(prefs.reading_mask);
    assert!(prefs.text_to_speech);
    assert_eq!(session.active_profile(), Some(AccessProfile::ScreenReader));

    // sync_all pushed the reloaded record into the page.
    assert_eq!(session.effects().var(EffectVar::TextScale), 160.0);
    assert!(session.effects().is_on(EffectFlag::ReadingMask));
}

#[test]
fn test_first_run_creates_the_data_file_on_first_change() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("accesspanel").join("data");

    let mut session = engine(&data_dir);
    assert!(!stored_file(&data_dir).exists());

    session.set_large_cursor(true);

    assert!(stored_file(&data_dir).exists());
    let raw = std::fs::read_to_string(stored_file(&data_dir)).unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["largeCursor"], true);
    assert_eq!(json["version"], "2");
}

#[test]
fn test_corrupt_file_on_disk_starts_clean_and_heals() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(stored_file(dir.path()), "{{{{ not json").unwrap();

    let mut session = engine(dir.path());
    let prefs = session.prefs();
    assert_eq!(prefs.text_scale, 100.0);
    assert!(!prefs.high_contrast);

    // The next change replaces the corrupt file with a valid record.
    session.set_page_zoom(115.0);

    let raw = std::fs::read_to_string(stored_file(dir.path())).unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["pageZoom"], 115.0);
}

#[test]
fn test_stored_garbage_values_are_normalized() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        stored_file(dir.path()),
        r#"{"version":"2","pageZoom":4.0,"highContrast":true,"lightContrast":true}"#,
    )
    .unwrap();

    let session = engine(dir.path());
    let prefs = session.prefs();
    assert_eq!(prefs.page_zoom, 50.0);
    assert!(prefs.high_contrast);
    assert!(!prefs.light_contrast);
    assert!(session.effects().is_on(EffectFlag::HighContrast));
    assert!(!session.effects().is_on(EffectFlag::LightContrast));
}

#[test]
fn test_reset_persists_the_default_record() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = engine(dir.path());
        session.set_word_spacing(12.0);
        session.set_monochrome(true);
        session.reset_all();
    }

    let session = engine(dir.path());
    for key in SettingKey::all() {
        assert_eq!(
            session.store().get(key),
            key.default_value(),
            "{} did not reset",
            key
        );
    }
    assert_eq!(session.effects().var(EffectVar::WordSpacing), 0.0);
}

#[test]
fn test_two_backends_on_the_same_directory_see_each_other() {
    let dir = tempfile::tempdir().unwrap();

    let mut writer = engine(dir.path());
    writer.set_dyslexia_font(true);

    let reader = PreferenceStore::new(FileBackend::with_dir(dir.path()));
    assert_eq!(
        reader.get(SettingKey::DyslexiaFont),
        SettingValue::Toggle(true)
    );
}
