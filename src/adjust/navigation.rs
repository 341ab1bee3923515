//! Navigation adjustments: orientation and pointing aids.

use crate::prefs::{SettingKey, SettingValue, SettingsBackend};

use super::{Adjuster, EffectTarget};

impl<B: SettingsBackend, T: EffectTarget> Adjuster<B, T> {
    /// Always-visible focus outlines on interactive elements.
    pub fn set_focus_indicators(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::FocusIndicators, on)
    }

    /// Enlarged pointer.
    pub fn set_large_cursor(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::LargeCursor, on)
    }

    /// Horizontal guide line that follows the pointer.
    pub fn set_reading_guide(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::ReadingGuide, on)
    }

    /// Dim everything outside a band around the pointer.
    pub fn set_reading_mask(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::ReadingMask, on)
    }

    /// Emphasize links.
    pub fn set_highlight_links(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::HighlightLinks, on)
    }

    /// Emphasize headings.
    pub fn set_highlight_headers(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::HighlightHeaders, on)
    }
}
