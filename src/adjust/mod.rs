//! Adjustment modules: the layer between the preference store and the
//! page. Every setter normalizes its input, emits the matching page
//! effect, delegates persistence to the store and returns the value that
//! actually took hold so controls can show it immediately.
//!
//! Concerns are split across `visual`, `navigation`, `content` and
//! `profiles`; all of them operate on the shared [`Adjuster`].

pub mod effects;

mod content;
mod navigation;
mod profiles;
mod visual;

pub use effects::{EffectCall, EffectFlag, EffectTarget, EffectVar, PageEffects, RecordingTarget};
pub use profiles::AccessProfile;

use tracing::warn;

use crate::prefs::{
    Preferences, PreferenceStore, SettingKey, SettingKind, SettingValue, SettingsBackend,
};

/// Applies preference changes to a store and an effect target.
pub struct Adjuster<B: SettingsBackend, T: EffectTarget> {
    store: PreferenceStore<B>,
    target: T,
}

impl<B: SettingsBackend, T: EffectTarget> Adjuster<B, T> {
    pub fn new(store: PreferenceStore<B>, target: T) -> Self {
        Self { store, target }
    }

    pub fn store(&self) -> &PreferenceStore<B> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut PreferenceStore<B> {
        &mut self.store
    }

    pub fn effects(&self) -> &T {
        &self.target
    }

    /// Defensive copy of the current record.
    pub fn prefs(&self) -> Preferences {
        self.store.get_all()
    }

    /// Route a setting change through its adjustment module. Mismatched
    /// value kinds are logged and ignored; the current value is returned
    /// either way.
    pub fn apply(&mut self, key: SettingKey, value: SettingValue) -> SettingValue {
        match (key.kind(), value) {
            (SettingKind::Scalar, SettingValue::Scalar(v)) => self.apply_scalar(key, v),
            (SettingKind::Toggle, SettingValue::Toggle(on)) => self.apply_toggle(key, on),
            _ => {
                warn!("ignoring {} value for setting {}", value, key);
                self.store.get(key)
            }
        }
    }

    fn apply_scalar(&mut self, key: SettingKey, value: f32) -> SettingValue {
        match key {
            SettingKey::TextScale => self.set_text_scale(value),
            SettingKey::PageZoom => self.set_page_zoom(value),
            SettingKey::LineHeight => self.set_line_height(value),
            SettingKey::LetterSpacing => self.set_letter_spacing(value),
            SettingKey::WordSpacing => self.set_word_spacing(value),
            _ => self.store.get(key),
        }
    }

    fn apply_toggle(&mut self, key: SettingKey, on: bool) -> SettingValue {
        match key {
            SettingKey::HighContrast => self.set_high_contrast(on),
            SettingKey::DarkContrast => self.set_dark_contrast(on),
            SettingKey::LightContrast => self.set_light_contrast(on),
            SettingKey::InvertColors => self.set_invert_colors(on),
            SettingKey::Monochrome => self.set_monochrome(on),
            SettingKey::DyslexiaFont => self.set_dyslexia_font(on),
            SettingKey::FocusIndicators => self.set_focus_indicators(on),
            SettingKey::LargeCursor => self.set_large_cursor(on),
            SettingKey::ReadingGuide => self.set_reading_guide(on),
            SettingKey::ReadingMask => self.set_reading_mask(on),
            SettingKey::HighlightLinks => self.set_highlight_links(on),
            SettingKey::HighlightHeaders => self.set_highlight_headers(on),
            SettingKey::StopAnimations => self.set_stop_animations(on),
            SettingKey::HideImages => self.set_hide_images(on),
            SettingKey::MuteSounds => self.set_mute_sounds(on),
            SettingKey::TextToSpeech => self.set_text_to_speech(on),
            _ => self.store.get(key),
        }
    }

    /// Reset every setting to its default and resync the page.
    pub fn reset_all(&mut self) -> Preferences {
        self.store.reset();
        self.sync_all();
        self.prefs()
    }

    /// Push the whole record into the effect target. Used at startup and
    /// after wholesale record changes.
    pub fn sync_all(&mut self) {
        let prefs = self.store.get_all();
        for key in SettingKey::all() {
            match prefs.get(key) {
                SettingValue::Toggle(on) => {
                    if let Some(flag) = EffectFlag::for_setting(key) {
                        self.target.set_flag(flag, on);
                    }
                }
                SettingValue::Scalar(v) => {
                    if let Some(var) = EffectVar::for_setting(key) {
                        self.target.set_var(var, v);
                    }
                }
            }
        }
    }

    /// Write a toggle to both the target and the store.
    fn toggle(&mut self, key: SettingKey, on: bool) -> SettingValue {
        let stored = self.store.set(key, SettingValue::Toggle(on));
        if let (Some(flag), Some(on)) = (EffectFlag::for_setting(key), stored.as_toggle()) {
            self.target.set_flag(flag, on);
        }
        stored
    }

    /// Write a clamped scalar to both the target and the store.
    fn scalar(&mut self, key: SettingKey, value: f32) -> SettingValue {
        let stored = self.store.set(key, SettingValue::Scalar(value));
        if let (Some(var), Some(v)) = (EffectVar::for_setting(key), stored.as_scalar()) {
            self.target.set_var(var, v);
        }
        stored
    }
}
