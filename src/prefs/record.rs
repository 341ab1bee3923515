//! The persisted preference record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::keys::{SettingKey, SettingValue};

/// Current schema version. Stored as a string; anything else found in a
/// loaded record (including older numeric versions) is migration input.
pub const SCHEMA_VERSION: &str = "2";

/// The full set of user preferences, as persisted.
///
/// Field names match the stored JSON one to one. Missing fields fill from
/// defaults on deserialization, so a partially written record still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub version: String,
    pub text_scale: f32,
    pub page_zoom: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub word_spacing: f32,
    pub high_contrast: bool,
    pub dark_contrast: bool,
    pub light_contrast: bool,
    pub invert_colors: bool,
    pub monochrome: bool,
    pub dyslexia_font: bool,
    pub focus_indicators: bool,
    pub large_cursor: bool,
    pub reading_guide: bool,
    pub reading_mask: bool,
    pub highlight_links: bool,
    pub highlight_headers: bool,
    pub stop_animations: bool,
    pub hide_images: bool,
    pub mute_sounds: bool,
    pub text_to_speech: bool,
    /// Identifier of the preset that produced the current values, if any.
    /// Cleared whenever a field changes outside of preset application.
    pub active_profile: Option<String>,
    /// Last modification timestamp. Bookkeeping only, never part of the
    /// setting API.
    pub updated_at: DateTime<Utc>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            text_scale: 100.0,
            page_zoom: 100.0,
            line_height: 1.0,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            high_contrast: false,
            dark_contrast: false,
            light_contrast: false,
            invert_colors: false,
            monochrome: false,
            dyslexia_font: false,
            focus_indicators: false,
            large_cursor: false,
            reading_guide: false,
            reading_mask: false,
            highlight_links: false,
            highlight_headers: false,
            stop_animations: false,
            hide_images: false,
            mute_sounds: false,
            text_to_speech: false,
            active_profile: None,
            updated_at: Utc::now(),
        }
    }
}

impl Preferences {
    /// Current value of a single setting.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::TextScale => SettingValue::Scalar(self.text_scale),
            SettingKey::PageZoom => SettingValue::Scalar(self.page_zoom),
            SettingKey::LineHeight => SettingValue::Scalar(self.line_height),
            SettingKey::LetterSpacing => SettingValue::Scalar(self.letter_spacing),
            SettingKey::WordSpacing => SettingValue::Scalar(self.word_spacing),
            SettingKey::HighContrast => SettingValue::Toggle(self.high_contrast),
            SettingKey::DarkContrast => SettingValue::Toggle(self.dark_contrast),
            SettingKey::LightContrast => SettingValue::Toggle(self.light_contrast),
            SettingKey::InvertColors => SettingValue::Toggle(self.invert_colors),
            SettingKey::Monochrome => SettingValue::Toggle(self.monochrome),
            SettingKey::DyslexiaFont => SettingValue::Toggle(self.dyslexia_font),
            SettingKey::FocusIndicators => SettingValue::Toggle(self.focus_indicators),
            SettingKey::LargeCursor => SettingValue::Toggle(self.large_cursor),
            SettingKey::ReadingGuide => SettingValue::Toggle(self.reading_guide),
            SettingKey::ReadingMask => SettingValue::Toggle(self.reading_mask),
            SettingKey::HighlightLinks => SettingValue::Toggle(self.highlight_links),
            SettingKey::HighlightHeaders => SettingValue::Toggle(self.highlight_headers),
            SettingKey::StopAnimations => SettingValue::Toggle(self.stop_animations),
            SettingKey::HideImages => SettingValue::Toggle(self.hide_images),
            SettingKey::MuteSounds => SettingValue::Toggle(self.mute_sounds),
            SettingKey::TextToSpeech => SettingValue::Toggle(self.text_to_speech),
        }
    }

    /// Assign a value to a field, clamping scalars into bounds.
    ///
    /// Returns the stored value, or `None` when the value kind does not
    /// match the setting (a toggle for a scalar or vice versa).
    pub(crate) fn set_field(&mut self, key: SettingKey, value: SettingValue) -> Option<SettingValue> {
        let value = key.clamp(value);
        match (key, value) {
            (SettingKey::TextScale, SettingValue::Scalar(v)) => self.text_scale = v,
            (SettingKey::PageZoom, SettingValue::Scalar(v)) => self.page_zoom = v,
            (SettingKey::LineHeight, SettingValue::Scalar(v)) => self.line_height = v,
            (SettingKey::LetterSpacing, SettingValue::Scalar(v)) => self.letter_spacing = v,
            (SettingKey::WordSpacing, SettingValue::Scalar(v)) => self.word_spacing = v,
            (SettingKey::HighContrast, SettingValue::Toggle(v)) => self.high_contrast = v,
            (SettingKey::DarkContrast, SettingValue::Toggle(v)) => self.dark_contrast = v,
            (SettingKey::LightContrast, SettingValue::Toggle(v)) => self.light_contrast = v,
            (SettingKey::InvertColors, SettingValue::Toggle(v)) => self.invert_colors = v,
            (SettingKey::Monochrome, SettingValue::Toggle(v)) => self.monochrome = v,
            (SettingKey::DyslexiaFont, SettingValue::Toggle(v)) => self.dyslexia_font = v,
            (SettingKey::FocusIndicators, SettingValue::Toggle(v)) => self.focus_indicators = v,
            (SettingKey::LargeCursor, SettingValue::Toggle(v)) => self.large_cursor = v,
            (SettingKey::ReadingGuide, SettingValue::Toggle(v)) => self.reading_guide = v,
            (SettingKey::ReadingMask, SettingValue::Toggle(v)) => self.reading_mask = v,
            (SettingKey::HighlightLinks, SettingValue::Toggle(v)) => self.highlight_links = v,
            (SettingKey::HighlightHeaders, SettingValue::Toggle(v)) => self.highlight_headers = v,
            (SettingKey::StopAnimations, SettingValue::Toggle(v)) => self.stop_animations = v,
            (SettingKey::HideImages, SettingValue::Toggle(v)) => self.hide_images = v,
            (SettingKey::MuteSounds, SettingValue::Toggle(v)) => self.mute_sounds = v,
            (SettingKey::TextToSpeech, SettingValue::Toggle(v)) => self.text_to_speech = v,
            _ => return None,
        }
        Some(value)
    }

    /// Stamp version and modification time after a mutation.
    pub(crate) fn touch(&mut self) {
        self.version = SCHEMA_VERSION.to_string();
        self.updated_at = Utc::now();
    }

    /// The active member of the contrast group, if any.
    pub fn active_contrast(&self) -> Option<SettingKey> {
        SettingKey::CONTRAST_GROUP
            .into_iter()
            .find(|key| self.get(*key) == SettingValue::Toggle(true))
    }

    /// Re-establish record invariants after deserializing foreign data:
    /// scalars inside bounds, at most one contrast mode (first one wins).
    pub(crate) fn sanitize(&mut self) {
        for key in SettingKey::all() {
            let value = self.get(key);
            if key.clamp(value) != value {
                self.set_field(key, value);
            }
        }

        let mut seen = false;
        for key in SettingKey::CONTRAST_GROUP {
            if self.get(key) == SettingValue::Toggle(true) {
                if seen {
                    self.set_field(key, SettingValue::Toggle(false));
                } else {
                    seen = true;
                }
            }
        }
    }
}
