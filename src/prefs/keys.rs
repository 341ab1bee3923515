//! Setting registry: every adjustable preference with its wire name,
//! kind, bounds and default.

use std::fmt;
use std::str::FromStr;

/// Whether a setting is an on/off switch or a bounded numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Toggle,
    Scalar,
}

/// A single preference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingValue {
    Toggle(bool),
    Scalar(f32),
}

impl SettingValue {
    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            SettingValue::Toggle(v) => Some(*v),
            SettingValue::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            SettingValue::Scalar(v) => Some(*v),
            SettingValue::Toggle(_) => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Toggle(true) => write!(f, "on"),
            SettingValue::Toggle(false) => write!(f, "off"),
            SettingValue::Scalar(v) => write!(f, "{v}"),
        }
    }
}

/// Every setting the engine manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    TextScale,
    PageZoom,
    LineHeight,
    LetterSpacing,
    WordSpacing,
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

impl SettingKey {
    /// The contrast modes that exclude one another. At most one of these
    /// may be active at any time; `Monochrome` stacks and is not a member.
    pub const CONTRAST_GROUP: [SettingKey; 4] = [
        SettingKey::HighContrast,
        SettingKey::DarkContrast,
        SettingKey::LightContrast,
        SettingKey::InvertColors,
    ];

    /// All settings, in schema order.
    pub fn all() -> [SettingKey; 21] {
        [
            SettingKey::TextScale,
            SettingKey::PageZoom,
            SettingKey::LineHeight,
            SettingKey::LetterSpacing,
            SettingKey::WordSpacing,
            SettingKey::HighContrast,
            SettingKey::DarkContrast,
            SettingKey::LightContrast,
            SettingKey::InvertColors,
            SettingKey::Monochrome,
            SettingKey::DyslexiaFont,
            SettingKey::FocusIndicators,
            SettingKey::LargeCursor,
            SettingKey::ReadingGuide,
            SettingKey::ReadingMask,
            SettingKey::HighlightLinks,
            SettingKey::HighlightHeaders,
            SettingKey::StopAnimations,
            SettingKey::HideImages,
            SettingKey::MuteSounds,
            SettingKey::TextToSpeech,
        ]
    }

    /// The name used in the persisted record and in control layouts.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SettingKey::TextScale => "textScale",
            SettingKey::PageZoom => "pageZoom",
            SettingKey::LineHeight => "lineHeight",
            SettingKey::LetterSpacing => "letterSpacing",
            SettingKey::WordSpacing => "wordSpacing",
            SettingKey::HighContrast => "highContrast",
            SettingKey::DarkContrast => "darkContrast",
            SettingKey::LightContrast => "lightContrast",
            SettingKey::InvertColors => "invertColors",
            SettingKey::Monochrome => "monochrome",
            SettingKey::DyslexiaFont => "dyslexiaFont",
            SettingKey::FocusIndicators => "focusIndicators",
            SettingKey::LargeCursor => "largeCursor",
            SettingKey::ReadingGuide => "readingGuide",
            SettingKey::ReadingMask => "readingMask",
            SettingKey::HighlightLinks => "highlightLinks",
            SettingKey::HighlightHeaders => "highlightHeaders",
            SettingKey::StopAnimations => "stopAnimations",
            SettingKey::HideImages => "hideImages",
            SettingKey::MuteSounds => "muteSounds",
            SettingKey::TextToSpeech => "textToSpeech",
        }
    }

    pub fn kind(&self) -> SettingKind {
        match self {
            SettingKey::TextScale
            | SettingKey::PageZoom
            | SettingKey::LineHeight
            | SettingKey::LetterSpacing
            | SettingKey::WordSpacing => SettingKind::Scalar,
            _ => SettingKind::Toggle,
        }
    }

    /// Inclusive bounds for scalar settings.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        match self {
            SettingKey::TextScale => Some((50.0, 200.0)),
            SettingKey::PageZoom => Some((50.0, 200.0)),
            SettingKey::LineHeight => Some((1.0, 3.0)),
            SettingKey::LetterSpacing => Some((0.0, 10.0)),
            SettingKey::WordSpacing => Some((0.0, 20.0)),
            _ => None,
        }
    }

    pub fn default_value(&self) -> SettingValue {
        match self {
            SettingKey::TextScale => SettingValue::Scalar(100.0),
            SettingKey::PageZoom => SettingValue::Scalar(100.0),
            SettingKey::LineHeight => SettingValue::Scalar(1.0),
            SettingKey::LetterSpacing => SettingValue::Scalar(0.0),
            SettingKey::WordSpacing => SettingValue::Scalar(0.0),
            _ => SettingValue::Toggle(false),
        }
    }

    /// Clamp a value into this setting's bounds. Toggles pass through.
    pub fn clamp(&self, value: SettingValue) -> SettingValue {
        match (value, self.bounds()) {
            (SettingValue::Scalar(v), Some((min, max))) => SettingValue::Scalar(v.clamp(min, max)),
            (other, _) => other,
        }
    }

    pub fn is_contrast_mode(&self) -> bool {
        Self::CONTRAST_GROUP.contains(self)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Error returned when a setting name is not part of the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown setting: {0}")]
pub struct UnknownSetting(pub String);

impl FromStr for SettingKey {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::all()
            .into_iter()
            .find(|key| key.wire_name() == s)
            .ok_or_else(|| UnknownSetting(s.to_string()))
    }
}
