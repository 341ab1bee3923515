//! Unit tests for the preference store.
//!
//! Covers the stored wire format, clamping on write, preset bookkeeping
//! and recovery from bad data.

use accesspanel::prefs::{
    MemoryBackend, PreferenceStore, SettingKey, SettingValue, SettingsBackend, STORAGE_KEY,
};
use serde_json::Value;

fn stored_json(backend: &MemoryBackend) -> Value {
    let raw = backend.get_item(STORAGE_KEY).expect("nothing persisted");
    serde_json::from_str(&raw).expect("persisted record is not JSON")
}

#[test]
fn test_persisted_record_carries_every_setting() {
    let backend = MemoryBackend::new();
    let mut store = PreferenceStore::new(backend.clone());

    store.set(SettingKey::TextScale, SettingValue::Scalar(120.0));

    let json = stored_json(&backend);
    assert_eq!(json["version"], "2");
    for key in SettingKey::all() {
        assert!(
            json.get(key.wire_name()).is_some(),
            "missing {} in persisted record",
            key.wire_name()
        );
    }
    assert!(json.get("activeProfile").is_some());
    assert!(json.get("updatedAt").is_some());
}

#[test]
fn test_scalar_writes_clamp_to_bounds() {
    let mut store = PreferenceStore::new(MemoryBackend::new());

    assert_eq!(
        store.set(SettingKey::TextScale, SettingValue::Scalar(350.0)),
        SettingValue::Scalar(200.0)
    );
    assert_eq!(
        store.set(SettingKey::LineHeight, SettingValue::Scalar(0.0)),
        SettingValue::Scalar(1.0)
    );
    assert_eq!(
        store.set(SettingKey::WordSpacing, SettingValue::Scalar(-5.0)),
        SettingValue::Scalar(0.0)
    );
}

#[test]
fn test_manual_change_clears_active_preset() {
    let mut store = PreferenceStore::new(MemoryBackend::new());
    store.set_active_profile(Some("low-vision"));

    store.set(SettingKey::HideImages, SettingValue::Toggle(true));

    assert_eq!(store.active_profile(), None);
    assert_eq!(
        store.get(SettingKey::HideImages),
        SettingValue::Toggle(true)
    );
}

#[test]
fn test_stored_values_survive_a_second_store() {
    let backend = MemoryBackend::new();
    {
        let mut store = PreferenceStore::new(backend.clone());
        store.set(SettingKey::PageZoom, SettingValue::Scalar(140.0));
        store.set(SettingKey::ReadingMask, SettingValue::Toggle(true));
        store.set_active_profile(Some("adhd-friendly"));
    }

    let reloaded = PreferenceStore::new(backend);
    assert_eq!(
        reloaded.get(SettingKey::PageZoom),
        SettingValue::Scalar(140.0)
    );
    assert_eq!(
        reloaded.get(SettingKey::ReadingMask),
        SettingValue::Toggle(true)
    );
    assert_eq!(reloaded.active_profile(), Some("adhd-friendly"));
}

#[test]
fn test_unreadable_record_loads_as_defaults() {
    let mut backend = MemoryBackend::new();
    backend.set_item(STORAGE_KEY, "version: 2").unwrap();

    let store = PreferenceStore::new(backend);
    assert_eq!(
        store.get(SettingKey::TextScale),
        SettingValue::Scalar(100.0)
    );
    assert_eq!(store.active_profile(), None);
}

#[test]
fn test_out_of_bounds_stored_values_are_sanitized_on_load() {
    let mut backend = MemoryBackend::new();
    backend
        .set_item(
            STORAGE_KEY,
            r#"{"version":"2","textScale":9999.0,"letterSpacing":-3.0}"#,
        )
        .unwrap();

    let store = PreferenceStore::new(backend);
    assert_eq!(
        store.get(SettingKey::TextScale),
        SettingValue::Scalar(200.0)
    );
    assert_eq!(
        store.get(SettingKey::LetterSpacing),
        SettingValue::Scalar(0.0)
    );
}

#[test]
fn test_conflicting_contrast_modes_resolve_first_wins() {
    let mut backend = MemoryBackend::new();
    backend
        .set_item(
            STORAGE_KEY,
            r#"{"version":"2","darkContrast":true,"invertColors":true}"#,
        )
        .unwrap();

    let store = PreferenceStore::new(backend);
    assert_eq!(
        store.get(SettingKey::DarkContrast),
        SettingValue::Toggle(true)
    );
    assert_eq!(
        store.get(SettingKey::InvertColors),
        SettingValue::Toggle(false)
    );
}

#[test]
fn test_reset_restores_every_default() {
    let backend = MemoryBackend::new();
    let mut store = PreferenceStore::new(backend.clone());
    store.set(SettingKey::TextScale, SettingValue::Scalar(170.0));
    store.set(SettingKey::Monochrome, SettingValue::Toggle(true));
    store.set_active_profile(Some("seizure-safe"));

    store.reset();

    for key in SettingKey::all() {
        assert_eq!(store.get(key), key.default_value(), "{} not reset", key);
    }
    assert_eq!(store.active_profile(), None);

    let json = stored_json(&backend);
    assert_eq!(json["textScale"], 100.0);
    assert_eq!(json["monochrome"], false);
}

#[test]
fn test_reset_twice_persists_the_same_record() {
    let backend = MemoryBackend::new();
    let mut store = PreferenceStore::new(backend.clone());
    store.set(SettingKey::PageZoom, SettingValue::Scalar(140.0));

    store.reset();
    let mut once = stored_json(&backend);
    store.reset();
    let mut twice = stored_json(&backend);

    // Only the write stamp may differ between the two resets
    once.as_object_mut().unwrap().remove("updatedAt");
    twice.as_object_mut().unwrap().remove("updatedAt");
    assert_eq!(once, twice);
}
