//! The accessibility panel surface.
//!
//! Widgets here never own state: every row renders the registry's
//! mirrored value, reports gestures back through the registry, and the
//! registry refreshes the mirrors from the store. Keyboard focus is
//! bridged between the logical trap and egui's own focus memory.

use egui::{Align, Id, Key, Layout, Modifiers, Rect, RichText, ScrollArea, Ui, Vec2};

use crate::adjust::{Adjuster, EffectTarget};
use crate::i18n::{t, t_args};
use crate::panel::{
    Announcer, BindTarget, ControlBinding, ControlKind, ControlRegistry, Interaction,
    PanelController, PanelSection,
};
use crate::prefs::{SettingKey, SettingsBackend};
use crate::ui::theme::{draw_focus_ring, FocusIndicatorStyle};
use crate::ui::widgets::{accessible_button, accessible_icon_button, MIN_TOUCH_TARGET};

/// Tab stop before the first control.
pub fn close_button_id() -> Id {
    Id::new("panel-close-button")
}

/// Tab stop after the last control.
pub fn reset_button_id() -> Id {
    Id::new("panel-reset-button")
}

/// Full tab order for the focus trap: close button first, then every
/// control, then reset.
pub fn tab_order(registry: &ControlRegistry) -> Vec<Id> {
    let mut order = vec![close_button_id()];
    order.extend(registry.tab_order());
    order.push(reset_button_id());
    order
}

/// One widget drawn this frame, for focus bookkeeping.
struct RenderedRow {
    control: Id,
    widget: Id,
    rect: Rect,
    focused: bool,
}

/// Render the open panel. Returns true when the user asked to close it.
pub fn show_panel<B: SettingsBackend, T: EffectTarget>(
    ui: &mut Ui,
    registry: &mut ControlRegistry,
    adjuster: &mut Adjuster<B, T>,
    panel: &mut PanelController,
    announcer: &mut Announcer,
) -> bool {
    let prefs = adjuster.prefs();
    let focus_style = if prefs.focus_indicators {
        FocusIndicatorStyle::enhanced()
    } else {
        FocusIndicatorStyle::standard()
    };

    let mut close_requested = false;
    let mut rows: Vec<RenderedRow> = Vec::new();
    let mut pending: Vec<(Id, Interaction, bool)> = Vec::new();

    ui.horizontal(|ui| {
        ui.heading(t("panel-title"));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let close_label = t("panel-close");
            let response = ui.add(
                accessible_icon_button("\u{2715}", &close_label)
                    .icon_size(18.0)
                    .focus_style(focus_style),
            );
            if response.clicked() {
                close_requested = true;
            }
            rows.push(RenderedRow {
                control: close_button_id(),
                widget: response.id,
                rect: response.rect,
                focused: response.has_focus(),
            });
        });
    });
    ui.separator();

    ScrollArea::vertical().show(ui, |ui| {
        ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(120.0);

        for section in PanelSection::all() {
            let controls: Vec<ControlBinding> =
                registry.section_controls(section).cloned().collect();
            if controls.is_empty() {
                continue;
            }

            ui.add_space(10.0);
            ui.label(RichText::new(t(section.label_key())).strong());
            ui.separator();

            for control in controls {
                let response = match control.kind {
                    ControlKind::Slider => slider_row(ui, &control, &mut pending),
                    ControlKind::Switch => switch_row(ui, &control, &mut pending),
                    ControlKind::ContrastButton | ControlKind::ProfileButton => {
                        mode_button_row(ui, &control, &mut pending)
                    }
                };

                if response.gained_focus() {
                    panel.trap_mut().focus(control.id);
                }
                rows.push(RenderedRow {
                    control: control.id,
                    widget: response.id,
                    rect: response.rect,
                    focused: response.has_focus(),
                });
            }
        }

        ui.add_space(16.0);
        let reset_label = t("panel-reset");
        let response = ui.add(
            accessible_button(&reset_label)
                .danger()
                .min_size(Vec2::new(ui.available_width(), MIN_TOUCH_TARGET))
                .focus_style(focus_style),
        );
        if response.clicked() {
            let prefs = adjuster.reset_all();
            registry.sync_ui(&prefs);
            announcer.announce(t("announce-reset"));
        }
        rows.push(RenderedRow {
            control: reset_button_id(),
            widget: response.id,
            rect: response.rect,
            focused: response.has_focus(),
        });
    });

    route_pending(registry, adjuster, announcer, pending);
    bridge_focus(ui, panel, &rows, focus_style);

    close_requested
}

fn slider_row(
    ui: &mut Ui,
    control: &ControlBinding,
    pending: &mut Vec<(Id, Interaction, bool)>,
) -> egui::Response {
    let BindTarget::Setting(key) = control.target else {
        return ui.label("");
    };
    let (min, max) = key.bounds().unwrap_or((0.0, 1.0));

    ui.label(t(control.label_key));
    let mut value = control.value;
    let response = ui.add(
        egui::Slider::new(&mut value, min..=max)
            .step_by(slider_step(key))
            .fixed_decimals(slider_decimals(key))
            .suffix(slider_suffix(key)),
    );

    if response.changed() && value != control.value {
        // Persist every change, announce only once the gesture settles
        let settled = response.drag_stopped() || !response.dragged();
        pending.push((control.id, Interaction::SetValue(value), settled));
    } else if response.drag_stopped() {
        pending.push((control.id, Interaction::SetValue(value), true));
    }

    response
}

fn switch_row(
    ui: &mut Ui,
    control: &ControlBinding,
    pending: &mut Vec<(Id, Interaction, bool)>,
) -> egui::Response {
    let mut checked = control.checked;
    let response = ui.add_sized(
        [ui.available_width(), MIN_TOUCH_TARGET],
        egui::Checkbox::new(&mut checked, t(control.label_key)),
    );
    if response.clicked() {
        pending.push((control.id, Interaction::Activate, true));
    }
    response
}

fn mode_button_row(
    ui: &mut Ui,
    control: &ControlBinding,
    pending: &mut Vec<(Id, Interaction, bool)>,
) -> egui::Response {
    let response = ui.add_sized(
        [ui.available_width(), MIN_TOUCH_TARGET],
        egui::Button::selectable(control.checked, t(control.label_key)),
    );
    if response.clicked() {
        pending.push((control.id, Interaction::Activate, true));
    }
    response
}

/// Route collected gestures through the registry and speak the results.
fn route_pending<B: SettingsBackend, T: EffectTarget>(
    registry: &mut ControlRegistry,
    adjuster: &mut Adjuster<B, T>,
    announcer: &mut Announcer,
    pending: Vec<(Id, Interaction, bool)>,
) {
    for (id, gesture, announce) in pending {
        let Some(label_key) = registry.get(id).map(|c| c.label_key) else {
            continue;
        };
        if !registry.interact(id, gesture, adjuster) || !announce {
            continue;
        }
        let Some(control) = registry.get(id) else {
            continue;
        };

        let name = t(label_key);
        let text = match (control.kind, control.target) {
            (ControlKind::Slider, BindTarget::Setting(key)) => t_args(
                "announce-value",
                &[("name", name.as_str()), ("value", &format_value(key, control.value))],
            ),
            (ControlKind::ProfileButton, _) if control.checked => {
                t_args("announce-profile-applied", &[("name", name.as_str())])
            }
            (ControlKind::ProfileButton, _) => {
                t_args("announce-profile-cleared", &[("name", name.as_str())])
            }
            _ if control.checked => t_args("announce-enabled", &[("name", name.as_str())]),
            _ => t_args("announce-disabled", &[("name", name.as_str())]),
        };
        announcer.announce(text);
    }
}

/// Keep the logical trap and egui's focus memory in step.
fn bridge_focus(
    ui: &mut Ui,
    panel: &mut PanelController,
    rows: &[RenderedRow],
    focus_style: FocusIndicatorStyle,
) {
    if !panel.trap().is_active() {
        return;
    }

    let (forward, backward) = ui.input_mut(|i| {
        (
            i.consume_key(Modifiers::NONE, Key::Tab),
            i.consume_key(Modifiers::SHIFT, Key::Tab),
        )
    });
    if backward {
        panel.trap_mut().previous();
    } else if forward {
        panel.trap_mut().next();
    }

    let Some(current) = panel.trap().current() else {
        return;
    };
    let Some(row) = rows.iter().find(|r| r.control == current) else {
        return;
    };

    if forward || backward {
        let widget = row.widget;
        ui.memory_mut(|m| m.request_focus(widget));
    }
    if !row.focused {
        draw_focus_ring(ui.painter(), row.rect, focus_style);
    }
}

fn slider_step(key: SettingKey) -> f64 {
    match key {
        SettingKey::TextScale | SettingKey::PageZoom => 5.0,
        SettingKey::LineHeight => 0.1,
        _ => 0.5,
    }
}

fn slider_decimals(key: SettingKey) -> usize {
    match key {
        SettingKey::TextScale | SettingKey::PageZoom => 0,
        _ => 1,
    }
}

fn slider_suffix(key: SettingKey) -> &'static str {
    match key {
        SettingKey::TextScale | SettingKey::PageZoom => "%",
        SettingKey::LineHeight => "",
        _ => " px",
    }
}

fn format_value(key: SettingKey, value: f32) -> String {
    match key {
        SettingKey::TextScale | SettingKey::PageZoom => format!("{:.0}%", value),
        SettingKey::LineHeight => format!("{:.1}", value),
        _ => format!("{:.1} px", value),
    }
}
