//! Pointer-tracking reading aids painted over the whole page.

use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Stroke};

use crate::adjust::{EffectFlag, PageEffects};

/// Height of the clear band the reading mask leaves around the pointer.
const MASK_BAND: f32 = 56.0;

/// Paint the reading guide, reading mask and large cursor on the
/// foreground layer. All three follow the pointer and disappear when it
/// leaves the window.
pub fn draw_overlays(ctx: &Context, effects: &PageEffects) {
    let wants_overlay = effects.is_on(EffectFlag::ReadingGuide)
        || effects.is_on(EffectFlag::ReadingMask)
        || effects.is_on(EffectFlag::LargeCursor);
    if !wants_overlay {
        return;
    }

    let Some(pointer) = ctx.pointer_latest_pos() else {
        return;
    };

    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("page-overlays")));
    let screen = ctx.screen_rect();

    if effects.is_on(EffectFlag::ReadingMask) {
        let dim = Color32::from_black_alpha(160);
        let above = Rect::from_min_max(screen.min, Pos2::new(screen.max.x, pointer.y - MASK_BAND));
        let below = Rect::from_min_max(Pos2::new(screen.min.x, pointer.y + MASK_BAND), screen.max);
        painter.rect_filled(above, 0.0, dim);
        painter.rect_filled(below, 0.0, dim);
    }

    if effects.is_on(EffectFlag::ReadingGuide) {
        let stroke = Stroke::new(3.0, Color32::from_rgb(255, 200, 40));
        painter.line_segment(
            [
                Pos2::new(screen.min.x, pointer.y),
                Pos2::new(screen.max.x, pointer.y),
            ],
            stroke,
        );
    }

    if effects.is_on(EffectFlag::LargeCursor) {
        let accent = ctx.style().visuals.selection.stroke.color;
        painter.circle_stroke(pointer, 14.0, Stroke::new(3.0, accent));
        painter.circle_filled(pointer, 4.0, accent);
    }
}
