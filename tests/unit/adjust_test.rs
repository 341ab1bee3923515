//! Unit tests for the adjustment layer.
//!
//! Exercises setters through a recording target so both the persisted
//! outcome and the emitted page effects can be checked, including the
//! order of contrast-mode displacement.

use accesspanel::adjust::{Adjuster, EffectCall, EffectFlag, EffectVar, RecordingTarget};
use accesspanel::prefs::{MemoryBackend, PreferenceStore, SettingKey, SettingValue};

fn adjuster() -> Adjuster<MemoryBackend, RecordingTarget> {
    Adjuster::new(
        PreferenceStore::new(MemoryBackend::new()),
        RecordingTarget::new(),
    )
}

#[test]
fn test_scalar_setter_emits_var_and_persists() {
    let mut adjuster = adjuster();

    let stored = adjuster.set_text_scale(150.0);

    assert_eq!(stored, SettingValue::Scalar(150.0));
    assert_eq!(
        adjuster.store().get(SettingKey::TextScale),
        SettingValue::Scalar(150.0)
    );
    assert_eq!(
        adjuster.effects().calls(),
        &[EffectCall::Var(EffectVar::TextScale, 150.0)]
    );
}

#[test]
fn test_scalar_setter_emits_the_clamped_value() {
    let mut adjuster = adjuster();

    let stored = adjuster.set_line_height(7.5);

    assert_eq!(stored, SettingValue::Scalar(3.0));
    // The page gets the value that actually took hold, not the request.
    assert_eq!(
        adjuster.effects().calls(),
        &[EffectCall::Var(EffectVar::LineHeight, 3.0)]
    );
}

#[test]
fn test_toggle_setter_emits_flag_and_persists() {
    let mut adjuster = adjuster();

    adjuster.set_reading_guide(true);

    assert_eq!(
        adjuster.store().get(SettingKey::ReadingGuide),
        SettingValue::Toggle(true)
    );
    assert!(adjuster.effects().effects().is_on(EffectFlag::ReadingGuide));
}

#[test]
fn test_contrast_mode_displaces_the_active_sibling() {
    let mut adjuster = adjuster();

    adjuster.set_high_contrast(true);
    adjuster.set_dark_contrast(true);

    // The sibling goes off before the new mode comes on.
    assert_eq!(
        adjuster.effects().calls(),
        &[
            EffectCall::Flag(EffectFlag::HighContrast, true),
            EffectCall::Flag(EffectFlag::HighContrast, false),
            EffectCall::Flag(EffectFlag::DarkContrast, true),
        ]
    );
    assert_eq!(
        adjuster.store().get(SettingKey::HighContrast),
        SettingValue::Toggle(false)
    );
    assert_eq!(
        adjuster.store().get(SettingKey::DarkContrast),
        SettingValue::Toggle(true)
    );
}

#[test]
fn test_turning_a_contrast_mode_off_leaves_siblings_alone() {
    let mut adjuster = adjuster();

    adjuster.set_invert_colors(true);
    adjuster.set_high_contrast(false);

    assert_eq!(
        adjuster.effects().calls(),
        &[
            EffectCall::Flag(EffectFlag::InvertColors, true),
            EffectCall::Flag(EffectFlag::HighContrast, false),
        ]
    );
    assert_eq!(
        adjuster.store().get(SettingKey::InvertColors),
        SettingValue::Toggle(true)
    );
}

#[test]
fn test_monochrome_stacks_with_contrast_modes() {
    let mut adjuster = adjuster();

    adjuster.set_high_contrast(true);
    adjuster.set_monochrome(true);

    let effects = adjuster.effects().effects();
    assert!(effects.is_on(EffectFlag::HighContrast));
    assert!(effects.is_on(EffectFlag::Monochrome));

    // A new contrast mode keeps the grayscale filter.
    adjuster.set_dark_contrast(true);
    let effects = adjuster.effects().effects();
    assert!(!effects.is_on(EffectFlag::HighContrast));
    assert!(effects.is_on(EffectFlag::DarkContrast));
    assert!(effects.is_on(EffectFlag::Monochrome));
}

#[test]
fn test_apply_routes_by_setting_kind() {
    let mut adjuster = adjuster();

    adjuster.apply(SettingKey::WordSpacing, SettingValue::Scalar(6.0));
    adjuster.apply(SettingKey::MuteSounds, SettingValue::Toggle(true));

    assert_eq!(
        adjuster.store().get(SettingKey::WordSpacing),
        SettingValue::Scalar(6.0)
    );
    assert_eq!(
        adjuster.store().get(SettingKey::MuteSounds),
        SettingValue::Toggle(true)
    );
}

#[test]
fn test_apply_ignores_mismatched_value_kinds() {
    let mut adjuster = adjuster();

    let result = adjuster.apply(SettingKey::TextScale, SettingValue::Toggle(true));

    assert_eq!(result, SettingValue::Scalar(100.0));
    assert!(adjuster.effects().calls().is_empty());
}

#[test]
fn test_reset_all_resyncs_every_effect() {
    let mut adjuster = adjuster();
    adjuster.set_text_scale(180.0);
    adjuster.set_stop_animations(true);

    adjuster.reset_all();

    let effects = adjuster.effects().effects();
    assert_eq!(effects.var(EffectVar::TextScale), 100.0);
    assert!(!effects.is_on(EffectFlag::StopAnimations));
    // Two direct changes, then one resync call per setting.
    assert_eq!(
        adjuster.effects().calls().len(),
        2 + SettingKey::all().len()
    );
}

#[test]
fn test_sync_all_mirrors_the_stored_record() {
    let backend = MemoryBackend::new();
    {
        let mut seed = Adjuster::new(
            PreferenceStore::new(backend.clone()),
            RecordingTarget::new(),
        );
        seed.set_page_zoom(130.0);
        seed.set_highlight_links(true);
    }

    let mut adjuster = Adjuster::new(PreferenceStore::new(backend), RecordingTarget::new());
    adjuster.sync_all();

    let effects = adjuster.effects().effects();
    assert_eq!(effects.var(EffectVar::PageZoom), 130.0);
    assert!(effects.is_on(EffectFlag::HighlightLinks));
}
