//! Applies page effects to the egui context.
//!
//! The styler snapshots the pristine style once at startup and rebuilds
//! the live style from that snapshot every frame. Deriving from the
//! snapshot instead of mutating the current style keeps repeated
//! applications from compounding a scale factor into the fonts.

use egui::{Context, FontFamily, Style};

use crate::adjust::{EffectFlag, EffectVar, PageEffects};

use super::theme::{visuals_for, BaseTheme};

/// Rebuilds the context style from the active page effects.
pub struct PageStyler {
    base: Style,
}

impl PageStyler {
    /// Snapshot the context's current style as the baseline.
    pub fn capture(ctx: &Context) -> Self {
        Self {
            base: (*ctx.style()).clone(),
        }
    }

    /// Build a styler over an explicit baseline.
    pub fn from_style(base: Style) -> Self {
        Self { base }
    }

    /// Push the styled result of the current effects into the context.
    pub fn apply(&self, ctx: &Context, effects: &PageEffects, base_theme: BaseTheme) {
        let mut style = self.base.clone();

        let text_scale = effects.var(EffectVar::TextScale) / 100.0;
        if text_scale != 1.0 {
            for font_id in style.text_styles.values_mut() {
                font_id.size *= text_scale;
            }
        }

        if effects.is_on(EffectFlag::DyslexiaFont) {
            // Proxy for a dedicated dyslexia typeface: monospace keeps
            // letterforms distinct without bundling a font.
            for font_id in style.text_styles.values_mut() {
                font_id.family = FontFamily::Monospace;
            }
        }

        let line_height = effects.var(EffectVar::LineHeight);
        if line_height > 1.0 {
            style.spacing.item_spacing.y *= line_height;
        }

        if effects.is_on(EffectFlag::StopAnimations) {
            style.animation_time = 0.0;
        }

        style.visuals = visuals_for(effects, base_theme);

        ctx.set_style(style);
        ctx.set_zoom_factor(effects.var(EffectVar::PageZoom) / 100.0);
    }
}
