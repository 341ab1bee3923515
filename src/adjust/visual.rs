//! Visual adjustments: text metrics and color treatment.

use tracing::debug;

use crate::prefs::{SettingKey, SettingValue, SettingsBackend};

use super::{Adjuster, EffectFlag, EffectTarget};

impl<B: SettingsBackend, T: EffectTarget> Adjuster<B, T> {
    /// Scale body text, in percent of the base size.
    pub fn set_text_scale(&mut self, percent: f32) -> SettingValue {
        self.scalar(SettingKey::TextScale, percent)
    }

    /// Zoom the whole page, in percent.
    pub fn set_page_zoom(&mut self, percent: f32) -> SettingValue {
        self.scalar(SettingKey::PageZoom, percent)
    }

    /// Line height multiplier for body text.
    pub fn set_line_height(&mut self, multiplier: f32) -> SettingValue {
        self.scalar(SettingKey::LineHeight, multiplier)
    }

    /// Extra spacing between letters, in pixels.
    pub fn set_letter_spacing(&mut self, pixels: f32) -> SettingValue {
        self.scalar(SettingKey::LetterSpacing, pixels)
    }

    /// Extra spacing between words, in pixels.
    pub fn set_word_spacing(&mut self, pixels: f32) -> SettingValue {
        self.scalar(SettingKey::WordSpacing, pixels)
    }

    /// High contrast mode. Turning it on drops any other contrast mode.
    pub fn set_high_contrast(&mut self, on: bool) -> SettingValue {
        self.contrast_mode(SettingKey::HighContrast, on)
    }

    /// Dark contrast mode. Turning it on drops any other contrast mode.
    pub fn set_dark_contrast(&mut self, on: bool) -> SettingValue {
        self.contrast_mode(SettingKey::DarkContrast, on)
    }

    /// Light contrast mode. Turning it on drops any other contrast mode.
    pub fn set_light_contrast(&mut self, on: bool) -> SettingValue {
        self.contrast_mode(SettingKey::LightContrast, on)
    }

    /// Color inversion. Turning it on drops any other contrast mode.
    pub fn set_invert_colors(&mut self, on: bool) -> SettingValue {
        self.contrast_mode(SettingKey::InvertColors, on)
    }

    /// Grayscale filter. Stacks with any contrast mode.
    pub fn set_monochrome(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::Monochrome, on)
    }

    /// Dyslexia-friendly typeface.
    pub fn set_dyslexia_font(&mut self, on: bool) -> SettingValue {
        self.toggle(SettingKey::DyslexiaFont, on)
    }

    /// Enable one member of the contrast group, clearing whichever
    /// sibling was active first so at most one mode ever holds.
    fn contrast_mode(&mut self, key: SettingKey, on: bool) -> SettingValue {
        if on {
            for sibling in SettingKey::CONTRAST_GROUP {
                if sibling == key {
                    continue;
                }
                if self.store().get(sibling) == SettingValue::Toggle(true) {
                    debug!("contrast mode {} displaces {}", key, sibling);
                    self.toggle(sibling, false);
                }
            }
        }
        self.toggle(key, on)
    }
}
