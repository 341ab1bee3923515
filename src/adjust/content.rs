//! Content adjustments: motion, media and sound.

use crate::prefs::{SettingKey, SettingValue, SettingsBackend};

use super::{Adjuster, EffectTarget};

impl<B: SettingsBackend, T: EffectTarget> Adjuster<B, T> {
    /// Freeze animations and transitions.
    pub fn set_stop_animations(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::StopAnimations, on)
    }

    /// Replace images with their text alternatives.
    pub fn set_hide_images(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::HideImages, on)
    }

    /// Silence page media.
    pub fn set_mute_sounds(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::MuteSounds, on)
    }

    /// Speak announcements and focused content aloud.
    pub fn set_text_to_speech(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::TextToSpeech, on)
    }
}
