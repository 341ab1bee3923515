//! Theme palettes and the contrast-mode cascade.
//!
//! The base theme follows the system; contrast modes replace it
//! wholesale, then monochrome and inversion are applied as color
//! transforms on the resolved visuals.

use egui::{Color32, Painter, Rect, Stroke, StrokeKind, Visuals};

use crate::adjust::{EffectFlag, PageEffects};

/// Base theme used when no contrast mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseTheme {
    #[default]
    Dark,
    Light,
}

impl BaseTheme {
    /// Pick the base theme from the system preference.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => BaseTheme::Light,
            dark_light::Mode::Dark | dark_light::Mode::Default => BaseTheme::Dark,
        }
    }

    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            BaseTheme::Dark => DarkTheme::visuals(),
            BaseTheme::Light => LightTheme::visuals(),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(16, 17, 22);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(24, 25, 32);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(34, 36, 44);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 238, 242);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(168, 172, 182);
    /// Accent color
    pub const ACCENT: Color32 = Color32::from_rgb(74, 140, 245);
    /// Hyperlink color
    pub const LINK: Color32 = Color32::from_rgb(108, 166, 255);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(58, 60, 72);

    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;
        visuals.hyperlink_color = Self::LINK;

        visuals.widgets.noninteractive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.bg_fill = Self::CARD_BG;
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(46, 48, 58);
        visuals.widgets.active.bg_fill = Self::ACCENT;

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.4);
        visuals.selection.stroke.color = Self::ACCENT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.hovered.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.active.fg_stroke.color = Self::TEXT_PRIMARY;

        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;

        visuals
    }
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 249, 251);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::WHITE;
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(242, 243, 246);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 30, 38);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(92, 96, 106);
    /// Accent color
    pub const ACCENT: Color32 = Color32::from_rgb(24, 110, 222);
    /// Hyperlink color
    pub const LINK: Color32 = Color32::from_rgb(20, 92, 190);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(214, 216, 222);

    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::light();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;
        visuals.hyperlink_color = Self::LINK;

        visuals.widgets.noninteractive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.bg_fill = Self::CARD_BG;
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 232, 238);
        visuals.widgets.active.bg_fill = Self::ACCENT;

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.2);
        visuals.selection.stroke.color = Self::ACCENT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.hovered.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.active.fg_stroke.color = Color32::WHITE;

        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;

        visuals
    }
}

/// High contrast colors meeting WCAG AAA requirements (7:1 ratio).
pub struct HighContrastTheme;

impl HighContrastTheme {
    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const PANEL_BG: Color32 = Color32::from_rgb(8, 8, 8);
    pub const CARD_BG: Color32 = Color32::from_rgb(18, 18, 18);

    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(224, 224, 224);

    // Bright for visibility
    pub const ACCENT: Color32 = Color32::from_rgb(0, 210, 255);
    pub const LINK: Color32 = Color32::from_rgb(120, 220, 255);

    pub const BORDER: Color32 = Color32::WHITE;

    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;
        visuals.hyperlink_color = Self::LINK;

        visuals.widgets.noninteractive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.bg_fill = Self::CARD_BG;
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 40, 40);
        visuals.widgets.active.bg_fill = Self::ACCENT;

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.5);
        visuals.selection.stroke.color = Self::ACCENT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.hovered.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.active.fg_stroke.color = Self::BACKGROUND;

        // Prominent borders
        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;
        visuals.widgets.noninteractive.bg_stroke.width = 1.5;
        visuals.widgets.inactive.bg_stroke.width = 1.5;

        visuals
    }
}

/// Forced dark scheme with stronger contrast than the base dark theme.
pub struct DarkContrastTheme;

impl DarkContrastTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(10, 11, 14);
    pub const PANEL_BG: Color32 = Color32::from_rgb(16, 17, 21);
    pub const CARD_BG: Color32 = Color32::from_rgb(26, 28, 34);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(250, 250, 252);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(206, 209, 216);
    pub const ACCENT: Color32 = Color32::from_rgb(90, 160, 255);
    pub const BORDER: Color32 = Color32::from_rgb(120, 124, 134);

    pub fn visuals() -> Visuals {
        let mut visuals = DarkTheme::visuals();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;
        visuals.hyperlink_color = Self::ACCENT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;

        visuals
    }
}

/// Forced light scheme with stronger contrast than the base light theme.
pub struct LightContrastTheme;

impl LightContrastTheme {
    pub const BACKGROUND: Color32 = Color32::WHITE;
    pub const PANEL_BG: Color32 = Color32::from_rgb(250, 250, 250);
    pub const CARD_BG: Color32 = Color32::from_rgb(240, 240, 242);
    pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(54, 56, 62);
    pub const ACCENT: Color32 = Color32::from_rgb(0, 82, 204);
    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 44);

    pub fn visuals() -> Visuals {
        let mut visuals = LightTheme::visuals();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;
        visuals.hyperlink_color = Self::ACCENT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;

        visuals
    }
}

/// Calculate contrast ratio between two colors.
/// Returns a value between 1 and 21 (21 being black on white).
pub fn contrast_ratio(fg: Color32, bg: Color32) -> f32 {
    let fg_lum = relative_luminance(fg);
    let bg_lum = relative_luminance(bg);

    let (lighter, darker) = if fg_lum > bg_lum {
        (fg_lum, bg_lum)
    } else {
        (bg_lum, fg_lum)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// Calculate relative luminance of a color.
/// https://www.w3.org/TR/WCAG21/#dfn-relative-luminance
pub fn relative_luminance(color: Color32) -> f32 {
    let r = linearize(color.r() as f32 / 255.0);
    let g = linearize(color.g() as f32 / 255.0);
    let b = linearize(color.b() as f32 / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(value: f32) -> f32 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Check if contrast ratio meets WCAG AA standard (4.5:1 for normal text).
pub fn meets_aa(fg: Color32, bg: Color32) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if contrast ratio meets WCAG AAA standard (7:1 for normal text).
pub fn meets_aaa(fg: Color32, bg: Color32) -> bool {
    contrast_ratio(fg, bg) >= 7.0
}

/// Luminance-weighted grayscale conversion.
pub fn grayscale(color: Color32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let gray = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32).round() as u8;
    Color32::from_rgba_unmultiplied(gray, gray, gray, a)
}

/// Photographic-negative inversion, preserving alpha.
pub fn invert(color: Color32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(255 - r, 255 - g, 255 - b, a)
}

/// Run every themed color in the visuals through a transform.
fn map_visual_colors(mut visuals: Visuals, f: impl Fn(Color32) -> Color32) -> Visuals {
    visuals.window_fill = f(visuals.window_fill);
    visuals.panel_fill = f(visuals.panel_fill);
    visuals.faint_bg_color = f(visuals.faint_bg_color);
    visuals.extreme_bg_color = f(visuals.extreme_bg_color);
    visuals.code_bg_color = f(visuals.code_bg_color);
    visuals.hyperlink_color = f(visuals.hyperlink_color);
    visuals.warn_fg_color = f(visuals.warn_fg_color);
    visuals.error_fg_color = f(visuals.error_fg_color);
    visuals.window_stroke.color = f(visuals.window_stroke.color);
    visuals.selection.bg_fill = f(visuals.selection.bg_fill);
    visuals.selection.stroke.color = f(visuals.selection.stroke.color);

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.bg_fill = f(widget.bg_fill);
        widget.weak_bg_fill = f(widget.weak_bg_fill);
        widget.fg_stroke.color = f(widget.fg_stroke.color);
        widget.bg_stroke.color = f(widget.bg_stroke.color);
    }

    visuals
}

/// Resolve the visuals for the current page effects.
///
/// At most one contrast scheme can be active; monochrome and inversion
/// then transform whichever scheme won.
pub fn visuals_for(effects: &PageEffects, base: BaseTheme) -> Visuals {
    let mut visuals = if effects.is_on(EffectFlag::HighContrast) {
        HighContrastTheme::visuals()
    } else if effects.is_on(EffectFlag::DarkContrast) {
        DarkContrastTheme::visuals()
    } else if effects.is_on(EffectFlag::LightContrast) {
        LightContrastTheme::visuals()
    } else {
        base.visuals()
    };

    if effects.is_on(EffectFlag::InvertColors) {
        visuals = map_visual_colors(visuals, invert);
    }
    if effects.is_on(EffectFlag::Monochrome) {
        visuals = map_visual_colors(visuals, grayscale);
    }

    if effects.is_on(EffectFlag::FocusIndicators) {
        let focus = FocusIndicatorStyle::enhanced();
        visuals.selection.stroke = Stroke::new(focus.width, focus.color);
    }

    visuals
}

/// How keyboard focus is outlined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusIndicatorStyle {
    pub color: Color32,
    pub width: f32,
    /// Gap between the widget and the ring.
    pub padding: f32,
}

impl FocusIndicatorStyle {
    pub fn standard() -> Self {
        Self {
            color: Color32::from_rgb(90, 150, 250),
            width: 2.0,
            padding: 2.0,
        }
    }

    /// Thicker, warmer ring used when enhanced indicators are on.
    pub fn enhanced() -> Self {
        Self {
            color: Color32::from_rgb(255, 200, 40),
            width: 3.0,
            padding: 3.0,
        }
    }

    pub fn for_effects(effects: &PageEffects) -> Self {
        if effects.is_on(EffectFlag::FocusIndicators) {
            Self::enhanced()
        } else {
            Self::standard()
        }
    }
}

/// Outline a focused widget.
pub fn draw_focus_ring(painter: &Painter, rect: Rect, style: FocusIndicatorStyle) {
    painter.rect_stroke(
        rect.expand(style.padding),
        4.0,
        Stroke::new(style.width, style.color),
        StrokeKind::Outside,
    );
}
