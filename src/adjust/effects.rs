//! The page-effect seam.
//!
//! Adjustment modules do not touch widgets directly. They emit flags
//! (class-like switches) and vars (numeric properties) into an
//! [`EffectTarget`]; the rendering layer decides what those mean
//! visually. [`PageEffects`] is the default target, a queryable snapshot
//! the UI reads every frame.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::prefs::SettingKey;

/// Class-like switches a host applies to its page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectFlag {
    HighContrast,
    DarkContrast,
    LightContrast,
    InvertColors,
    Monochrome,
    DyslexiaFont,
    FocusIndicators,
    LargeCursor,
    ReadingGuide,
    ReadingMask,
    HighlightLinks,
    HighlightHeaders,
    StopAnimations,
    HideImages,
    MuteSounds,
    TextToSpeech,
}

impl EffectFlag {
    pub fn all() -> [EffectFlag; 16] {
        [
            EffectFlag::HighContrast,
            EffectFlag::DarkContrast,
            EffectFlag::LightContrast,
            EffectFlag::InvertColors,
            EffectFlag::Monochrome,
            EffectFlag::DyslexiaFont,
            EffectFlag::FocusIndicators,
            EffectFlag::LargeCursor,
            EffectFlag::ReadingGuide,
            EffectFlag::ReadingMask,
            EffectFlag::HighlightLinks,
            EffectFlag::HighlightHeaders,
            EffectFlag::StopAnimations,
            EffectFlag::HideImages,
            EffectFlag::MuteSounds,
            EffectFlag::TextToSpeech,
        ]
    }

    /// Class token a web-style host would put on its root element.
    pub fn class_name(&self) -> &'static str {
        match self {
            EffectFlag::HighContrast => "apx-high-contrast",
            EffectFlag::DarkContrast => "apx-dark-contrast",
            EffectFlag::LightContrast => "apx-light-contrast",
            EffectFlag::InvertColors => "apx-invert-colors",
            EffectFlag::Monochrome => "apx-monochrome",
            EffectFlag::DyslexiaFont => "apx-dyslexia-font",
            EffectFlag::FocusIndicators => "apx-focus-indicators",
            EffectFlag::LargeCursor => "apx-large-cursor",
            EffectFlag::ReadingGuide => "apx-reading-guide",
            EffectFlag::ReadingMask => "apx-reading-mask",
            EffectFlag::HighlightLinks => "apx-highlight-links",
            EffectFlag::HighlightHeaders => "apx-highlight-headers",
            EffectFlag::StopAnimations => "apx-stop-animations",
            EffectFlag::HideImages => "apx-hide-images",
            EffectFlag::MuteSounds => "apx-mute-sounds",
            EffectFlag::TextToSpeech => "apx-text-to-speech",
        }
    }

    /// The flag driven by a toggle setting, if any.
    pub fn for_setting(key: SettingKey) -> Option<EffectFlag> {
        match key {
            SettingKey::HighContrast => Some(EffectFlag::HighContrast),
            SettingKey::DarkContrast => Some(EffectFlag::DarkContrast),
            SettingKey::LightContrast => Some(EffectFlag::LightContrast),
            SettingKey::InvertColors => Some(EffectFlag::InvertColors),
            SettingKey::Monochrome => Some(EffectFlag::Monochrome),
            SettingKey::DyslexiaFont => Some(EffectFlag::DyslexiaFont),
            SettingKey::FocusIndicators => Some(EffectFlag::FocusIndicators),
            SettingKey::LargeCursor => Some(EffectFlag::LargeCursor),
            SettingKey::ReadingGuide => Some(EffectFlag::ReadingGuide),
            SettingKey::ReadingMask => Some(EffectFlag::ReadingMask),
            SettingKey::HighlightLinks => Some(EffectFlag::HighlightLinks),
            SettingKey::HighlightHeaders => Some(EffectFlag::HighlightHeaders),
            SettingKey::StopAnimations => Some(EffectFlag::StopAnimations),
            SettingKey::HideImages => Some(EffectFlag::HideImages),
            SettingKey::MuteSounds => Some(EffectFlag::MuteSounds),
            SettingKey::TextToSpeech => Some(EffectFlag::TextToSpeech),
            _ => None,
        }
    }
}

/// Numeric properties a host maps onto typography and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectVar {
    TextScale,
    PageZoom,
    LineHeight,
    LetterSpacing,
    WordSpacing,
}

impl EffectVar {
    pub fn all() -> [EffectVar; 5] {
        [
            EffectVar::TextScale,
            EffectVar::PageZoom,
            EffectVar::LineHeight,
            EffectVar::LetterSpacing,
            EffectVar::WordSpacing,
        ]
    }

    /// Custom-property name a web-style host would set on its root.
    pub fn property_name(&self) -> &'static str {
        match self {
            EffectVar::TextScale => "--apx-text-scale",
            EffectVar::PageZoom => "--apx-page-zoom",
            EffectVar::LineHeight => "--apx-line-height",
            EffectVar::LetterSpacing => "--apx-letter-spacing",
            EffectVar::WordSpacing => "--apx-word-spacing",
        }
    }

    pub fn default_value(&self) -> f32 {
        match self {
            EffectVar::TextScale | EffectVar::PageZoom => 100.0,
            EffectVar::LineHeight => 1.0,
            EffectVar::LetterSpacing | EffectVar::WordSpacing => 0.0,
        }
    }

    /// The var driven by a scalar setting, if any.
    pub fn for_setting(key: SettingKey) -> Option<EffectVar> {
        match key {
            SettingKey::TextScale => Some(EffectVar::TextScale),
            SettingKey::PageZoom => Some(EffectVar::PageZoom),
            SettingKey::LineHeight => Some(EffectVar::LineHeight),
            SettingKey::LetterSpacing => Some(EffectVar::LetterSpacing),
            SettingKey::WordSpacing => Some(EffectVar::WordSpacing),
            _ => None,
        }
    }
}

/// Receiver for page effects.
pub trait EffectTarget {
    fn set_flag(&mut self, flag: EffectFlag, on: bool);
    fn set_var(&mut self, var: EffectVar, value: f32);
}

/// Snapshot of the currently applied effects.
#[derive(Debug, Clone, Default)]
pub struct PageEffects {
    flags: HashSet<EffectFlag>,
    vars: HashMap<EffectVar, f32>,
}

impl PageEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self, flag: EffectFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Current value of a var, falling back to its default.
    pub fn var(&self, var: EffectVar) -> f32 {
        self.vars.get(&var).copied().unwrap_or_else(|| var.default_value())
    }

    /// Active class tokens in declaration order.
    pub fn class_list(&self) -> Vec<&'static str> {
        EffectFlag::all()
            .into_iter()
            .filter(|flag| self.is_on(*flag))
            .map(|flag| flag.class_name())
            .collect()
    }
}

impl EffectTarget for PageEffects {
    fn set_flag(&mut self, flag: EffectFlag, on: bool) {
        debug!("effect {} -> {}", flag.class_name(), on);
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    fn set_var(&mut self, var: EffectVar, value: f32) {
        debug!("effect {} -> {}", var.property_name(), value);
        self.vars.insert(var, value);
    }
}

/// One call into an [`EffectTarget`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectCall {
    Flag(EffectFlag, bool),
    Var(EffectVar, f32),
}

/// Target that records every call in order. Wraps a [`PageEffects`]
/// snapshot so state queries still work.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    effects: PageEffects,
    calls: Vec<EffectCall>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EffectCall] {
        &self.calls
    }

    pub fn effects(&self) -> &PageEffects {
        &self.effects
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl EffectTarget for RecordingTarget {
    fn set_flag(&mut self, flag: EffectFlag, on: bool) {
        self.calls.push(EffectCall::Flag(flag, on));
        self.effects.set_flag(flag, on);
    }

    fn set_var(&mut self, var: EffectVar, value: f32) {
        self.calls.push(EffectCall::Var(var, value));
        self.effects.set_var(var, value);
    }
}
