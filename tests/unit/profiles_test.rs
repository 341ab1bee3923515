//! Unit tests for preset application.

use accesspanel::adjust::{AccessProfile, Adjuster, EffectFlag, EffectVar, PageEffects};
use accesspanel::prefs::{MemoryBackend, PreferenceStore, SettingKey, SettingValue};

fn adjuster() -> Adjuster<MemoryBackend, PageEffects> {
    Adjuster::new(PreferenceStore::new(MemoryBackend::new()), PageEffects::new())
}

#[test]
fn test_apply_profile_sets_overrides_and_marks_active() {
    let mut adjuster = adjuster();

    let prefs = adjuster.apply_profile(AccessProfile::LowVision);

    assert_eq!(prefs.text_scale, 150.0);
    assert!(prefs.high_contrast);
    assert_eq!(prefs.active_profile.as_deref(), Some("low-vision"));
    assert_eq!(adjuster.active_profile(), Some(AccessProfile::LowVision));

    assert!(adjuster.effects().is_on(EffectFlag::HighContrast));
    assert_eq!(adjuster.effects().var(EffectVar::TextScale), 150.0);
}

#[test]
fn test_manual_edit_after_profile_keeps_values() {
    let mut adjuster = adjuster();
    adjuster.apply_profile(AccessProfile::LowVision);

    adjuster.set_line_height(2.0);

    let prefs = adjuster.prefs();
    // The preset marker goes away, its values stay.
    assert_eq!(prefs.active_profile, None);
    assert_eq!(prefs.text_scale, 150.0);
    assert!(prefs.high_contrast);
    assert_eq!(prefs.line_height, 2.0);
}

#[test]
fn test_clear_profile_restores_only_its_settings() {
    let mut adjuster = adjuster();
    adjuster.set_page_zoom(125.0);
    adjuster.apply_profile(AccessProfile::DyslexiaFriendly);

    adjuster.clear_profile(AccessProfile::DyslexiaFriendly);

    let prefs = adjuster.prefs();
    assert!(!prefs.dyslexia_font);
    assert_eq!(prefs.line_height, 1.0);
    assert_eq!(prefs.letter_spacing, 0.0);
    assert_eq!(prefs.word_spacing, 0.0);
    // The unrelated manual change survives.
    assert_eq!(prefs.page_zoom, 125.0);
    assert_eq!(prefs.active_profile, None);
}

#[test]
fn test_second_profile_replaces_the_marker_not_the_values() {
    let mut adjuster = adjuster();

    adjuster.apply_profile(AccessProfile::LowVision);
    adjuster.apply_profile(AccessProfile::ScreenReader);

    let prefs = adjuster.prefs();
    assert_eq!(prefs.active_profile.as_deref(), Some("screen-reader"));
    // Overrides accumulate; the first preset's settings are untouched
    // unless the second one drives them too.
    assert_eq!(prefs.text_scale, 150.0);
    assert!(prefs.high_contrast);
    assert!(prefs.text_to_speech);
    assert!(prefs.focus_indicators);
}

#[test]
fn test_profile_overrides_respect_contrast_exclusivity() {
    let mut adjuster = adjuster();
    adjuster.set_invert_colors(true);

    adjuster.apply_profile(AccessProfile::LowVision);

    let prefs = adjuster.prefs();
    assert!(prefs.high_contrast);
    assert!(!prefs.invert_colors);
    assert!(!adjuster.effects().is_on(EffectFlag::InvertColors));
}

#[test]
fn test_seizure_safe_freezes_motion_and_color() {
    let mut adjuster = adjuster();

    adjuster.apply_profile(AccessProfile::SeizureSafe);

    assert!(adjuster.effects().is_on(EffectFlag::StopAnimations));
    assert!(adjuster.effects().is_on(EffectFlag::Monochrome));
}

#[test]
fn test_active_profile_survives_reload() {
    let backend = MemoryBackend::new();
    {
        let mut adjuster = Adjuster::new(
            PreferenceStore::new(backend.clone()),
            PageEffects::new(),
        );
        adjuster.apply_profile(AccessProfile::AdhdFriendly);
    }

    let adjuster = Adjuster::new(PreferenceStore::new(backend), PageEffects::new());
    assert_eq!(adjuster.active_profile(), Some(AccessProfile::AdhdFriendly));
    assert_eq!(
        adjuster.store().get(SettingKey::ReadingMask),
        SettingValue::Toggle(true)
    );
}
