//! Accessible button widgets with 44x44 minimum touch targets.

use egui::{Align2, Color32, FontId, Response, Sense, Ui, Vec2, Widget};

use crate::ui::theme::{draw_focus_ring, FocusIndicatorStyle};

/// Minimum touch target size per WCAG 2.1 guidelines (44x44 CSS pixels).
pub const MIN_TOUCH_TARGET: f32 = 44.0;

/// Configuration for accessible button appearance.
#[derive(Debug, Clone)]
pub struct AccessibleButtonStyle {
    /// Minimum size for touch targets
    pub min_size: Vec2,
    /// Normal background color
    pub bg_color: Color32,
    /// Hovered background color
    pub bg_hover: Color32,
    /// Pressed background color
    pub bg_pressed: Color32,
    /// Text color
    pub text_color: Color32,
    /// Corner radius
    pub corner_radius: f32,
    /// Keyboard focus ring
    pub focus: FocusIndicatorStyle,
}

impl Default for AccessibleButtonStyle {
    fn default() -> Self {
        Self {
            min_size: Vec2::splat(MIN_TOUCH_TARGET),
            bg_color: Color32::from_rgb(58, 60, 70),
            bg_hover: Color32::from_rgb(76, 79, 92),
            bg_pressed: Color32::from_rgb(44, 46, 54),
            text_color: Color32::WHITE,
            corner_radius: 4.0,
            focus: FocusIndicatorStyle::standard(),
        }
    }
}

impl AccessibleButtonStyle {
    /// Primary action button style.
    pub fn primary() -> Self {
        Self {
            bg_color: Color32::from_rgb(74, 140, 245),
            bg_hover: Color32::from_rgb(96, 158, 255),
            bg_pressed: Color32::from_rgb(54, 118, 222),
            ..Default::default()
        }
    }

    /// Destructive action button style.
    pub fn danger() -> Self {
        Self {
            bg_color: Color32::from_rgb(208, 58, 70),
            bg_hover: Color32::from_rgb(228, 80, 92),
            bg_pressed: Color32::from_rgb(182, 44, 56),
            ..Default::default()
        }
    }
}

/// A button that never shrinks below the minimum touch target.
pub struct AccessibleButton<'a> {
    text: &'a str,
    /// Name for assistive tech when the text alone is not descriptive.
    accessible_label: Option<&'a str>,
    style: AccessibleButtonStyle,
    enabled: bool,
}

impl<'a> AccessibleButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            accessible_label: None,
            style: AccessibleButtonStyle::default(),
            enabled: true,
        }
    }

    pub fn accessible_label(mut self, label: &'a str) -> Self {
        self.accessible_label = Some(label);
        self
    }

    pub fn style(mut self, style: AccessibleButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn primary(mut self) -> Self {
        self.style = AccessibleButtonStyle::primary();
        self
    }

    pub fn danger(mut self) -> Self {
        self.style = AccessibleButtonStyle::danger();
        self
    }

    pub fn focus_style(mut self, focus: FocusIndicatorStyle) -> Self {
        self.style.focus = focus;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.style.min_size = size;
        self
    }
}

impl Widget for AccessibleButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            text,
            accessible_label,
            style,
            enabled,
        } = self;

        let galley =
            ui.painter()
                .layout_no_wrap(text.to_string(), FontId::default(), style.text_color);
        let padding = Vec2::new(16.0, 8.0);
        let content = galley.size() + padding * 2.0;
        let size = content.max(style.min_size);

        let sense = if enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if !enabled {
                style.bg_color.gamma_multiply(0.5)
            } else if response.is_pointer_button_down_on() {
                style.bg_pressed
            } else if response.hovered() {
                style.bg_hover
            } else {
                style.bg_color
            };
            ui.painter()
                .rect_filled(rect, style.corner_radius, bg_color);

            if response.has_focus() {
                draw_focus_ring(ui.painter(), rect, style.focus);
            }

            let text_color = if enabled {
                style.text_color
            } else {
                style.text_color.gamma_multiply(0.5)
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::default(),
                text_color,
            );
        }

        let label = accessible_label.unwrap_or(text);
        response.on_hover_text(label)
    }
}

/// Helper to create an accessible button.
pub fn accessible_button(text: &str) -> AccessibleButton<'_> {
    AccessibleButton::new(text)
}

/// Circular icon button with a minimum touch target.
pub struct AccessibleIconButton<'a> {
    icon: &'a str,
    accessible_label: &'a str,
    style: AccessibleButtonStyle,
    icon_size: f32,
}

impl<'a> AccessibleIconButton<'a> {
    pub fn new(icon: &'a str, accessible_label: &'a str) -> Self {
        Self {
            icon,
            accessible_label,
            style: AccessibleButtonStyle::default(),
            icon_size: 24.0,
        }
    }

    pub fn style(mut self, style: AccessibleButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn focus_style(mut self, focus: FocusIndicatorStyle) -> Self {
        self.style.focus = focus;
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }
}

impl Widget for AccessibleIconButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            icon,
            accessible_label,
            style,
            icon_size,
        } = self;

        let size = Vec2::splat(style.min_size.x.max(icon_size + 16.0));
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.is_pointer_button_down_on() {
                style.bg_pressed
            } else if response.hovered() {
                style.bg_hover
            } else {
                style.bg_color
            };
            ui.painter()
                .circle_filled(rect.center(), size.x / 2.0, bg_color);

            if response.has_focus() {
                ui.painter().circle_stroke(
                    rect.center(),
                    size.x / 2.0 + style.focus.padding,
                    egui::Stroke::new(style.focus.width, style.focus.color),
                );
            }

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                icon,
                FontId::proportional(icon_size),
                style.text_color,
            );
        }

        response.on_hover_text(accessible_label)
    }
}

/// Helper to create an accessible icon button.
pub fn accessible_icon_button<'a>(icon: &'a str, label: &'a str) -> AccessibleIconButton<'a> {
    AccessibleIconButton::new(icon, label)
}
