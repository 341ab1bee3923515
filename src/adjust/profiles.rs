//! Preset bundles of adjustments for common needs.

use tracing::info;

use crate::prefs::{Preferences, SettingKey, SettingValue, SettingsBackend};

use super::{Adjuster, EffectTarget};

/// A named preset. Applying one routes its overrides through the normal
/// adjustment setters, so clamping and contrast exclusivity still hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessProfile {
    LowVision,
    SeizureSafe,
    AdhdFriendly,
    DyslexiaFriendly,
    ScreenReader,
}

impl AccessProfile {
    pub fn all() -> [AccessProfile; 5] {
        [
            AccessProfile::LowVision,
            AccessProfile::SeizureSafe,
            AccessProfile::AdhdFriendly,
            AccessProfile::DyslexiaFriendly,
            AccessProfile::ScreenReader,
        ]
    }

    /// Stable identifier, as stored in the preference record.
    pub fn id(&self) -> &'static str {
        match self {
            AccessProfile::LowVision => "low-vision",
            AccessProfile::SeizureSafe => "seizure-safe",
            AccessProfile::AdhdFriendly => "adhd-friendly",
            AccessProfile::DyslexiaFriendly => "dyslexia-friendly",
            AccessProfile::ScreenReader => "screen-reader",
        }
    }

    pub fn from_id(id: &str) -> Option<AccessProfile> {
        AccessProfile::all().into_iter().find(|p| p.id() == id)
    }

    /// The settings this preset drives.
    pub fn overrides(&self) -> &'static [(SettingKey, SettingValue)] {
        match self {
            AccessProfile::LowVision => &[
                (SettingKey::TextScale, SettingValue::Scalar(150.0)),
                (SettingKey::HighContrast, SettingValue::Toggle(true)),
            ],
            AccessProfile::SeizureSafe => &[
                (SettingKey::StopAnimations, SettingValue::Toggle(true)),
                (SettingKey::Monochrome, SettingValue::Toggle(true)),
            ],
            AccessProfile::AdhdFriendly => &[
                (SettingKey::ReadingMask, SettingValue::Toggle(true)),
                (SettingKey::StopAnimations, SettingValue::Toggle(true)),
                (SettingKey::MuteSounds, SettingValue::Toggle(true)),
            ],
            AccessProfile::DyslexiaFriendly => &[
                (SettingKey::DyslexiaFont, SettingValue::Toggle(true)),
                (SettingKey::LineHeight, SettingValue::Scalar(2.0)),
                (SettingKey::LetterSpacing, SettingValue::Scalar(2.0)),
                (SettingKey::WordSpacing, SettingValue::Scalar(4.0)),
            ],
            AccessProfile::ScreenReader => &[
                (SettingKey::TextToSpeech, SettingValue::Toggle(true)),
                (SettingKey::FocusIndicators, SettingValue::Toggle(true)),
                (SettingKey::HighlightHeaders, SettingValue::Toggle(true)),
            ],
        }
    }
}

impl<B: SettingsBackend, T: EffectTarget> Adjuster<B, T> {
    /// Apply a preset, then record it as active. Each override goes
    /// through its adjustment module like a manual change would.
    pub fn apply_profile(&mut self, profile: AccessProfile) -> Preferences {
        for (key, value) in profile.overrides() {
            self.apply(*key, *value);
        }
        self.store_mut().set_active_profile(Some(profile.id()));
        info!("applied profile {}", profile.id());
        self.prefs()
    }

    /// Turn a preset off: restore defaults for exactly the settings it
    /// drives, then clear the active marker.
    pub fn clear_profile(&mut self, profile: AccessProfile) -> Preferences {
        for (key, _) in profile.overrides() {
            self.apply(*key, key.default_value());
        }
        self.store_mut().set_active_profile(None);
        info!("cleared profile {}", profile.id());
        self.prefs()
    }

    pub fn active_profile(&self) -> Option<AccessProfile> {
        self.store().active_profile().and_then(AccessProfile::from_id)
    }
}
