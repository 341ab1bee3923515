//! Demo reading surface the adjustments act on.
//!
//! A small article with headings, links, a figure and an animated badge,
//! enough for every page effect to have something visible to change.
//! Typography effects that egui's global style cannot express (letter
//! and word spacing, true line height) are applied here through layout
//! jobs.

use egui::{
    text::LayoutJob, Color32, RichText, ScrollArea, Sense, Stroke, StrokeKind, TextFormat,
    TextStyle, Ui, Vec2,
};
use tracing::{debug, info};

use crate::adjust::{EffectFlag, EffectVar, PageEffects};

pub struct DemoPage {
    chimes_played: u32,
}

impl Default for DemoPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoPage {
    pub fn new() -> Self {
        Self { chimes_played: 0 }
    }

    pub fn show(&mut self, ui: &mut Ui, effects: &PageEffects) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.set_max_width(720.0);

            heading(ui, effects, "The Lighthouse Keeper's Notebook");
            paragraph(
                ui,
                effects,
                "For forty-one years the lamp at Carraig Point was lit by hand. \
                 The keeper climbed the same hundred and twelve steps at dusk, \
                 trimmed the wick, wound the clockwork that turned the lens, and \
                 wrote one line in the station log before climbing back down.",
            );
            paragraph(
                ui,
                effects,
                "The log entries are mostly weather. Wind from the south-west, \
                 glass falling, two trawlers sheltering in the sound. But every \
                 few pages something else slips in: a pod of pilot whales, a \
                 wedding on the mainland seen through the telescope, the year \
                 the supply boat brought a piano.",
            );

            heading(ui, effects, "Reading the log today");
            paragraph(
                ui,
                effects,
                "The station was automated in 1986 and the logs moved to the \
                 county archive. Researchers use them to reconstruct storm \
                 records that predate the national weather service, one careful \
                 line at a time.",
            );

            ui.horizontal_wrapped(|ui| {
                ui.label("Sources:");
                demo_link(ui, effects, "Carraig Point station log, 1945-1986");
                demo_link(ui, effects, "Coastal weather reconstruction project");
            });
            ui.add_space(8.0);

            image_figure(
                ui,
                effects,
                "The first-order Fresnel lens, photographed in 1962.",
                "Photograph of a first-order Fresnel lens inside the lantern room.",
            );

            live_badge(ui, effects);
            self.chime_row(ui, effects);
        });
    }

    fn chime_row(&mut self, ui: &mut Ui, effects: &PageEffects) {
        ui.horizontal(|ui| {
            if ui.button("Play the fog bell").clicked() {
                if effects.is_on(EffectFlag::MuteSounds) {
                    debug!("fog bell suppressed while sounds are muted");
                } else {
                    self.chimes_played += 1;
                    info!("fog bell rang ({} so far)", self.chimes_played);
                }
            }
            if self.chimes_played > 0 {
                ui.label(
                    RichText::new(format!("Rang {} times", self.chimes_played)).weak(),
                );
            }
        });
        ui.add_space(12.0);
    }
}

fn heading(ui: &mut Ui, effects: &PageEffects, text: &str) {
    if effects.is_on(EffectFlag::HighlightHeaders) {
        let band = ui.visuals().selection.bg_fill;
        egui::Frame::new()
            .fill(band)
            .inner_margin(6.0)
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.heading(text);
            });
    } else {
        ui.heading(text);
    }
    ui.add_space(6.0);
}

/// Body text with the typography effects applied.
fn paragraph(ui: &mut Ui, effects: &PageEffects, text: &str) {
    let font_id = TextStyle::Body.resolve(ui.style());
    let letter = effects.var(EffectVar::LetterSpacing);
    let word = effects.var(EffectVar::WordSpacing);
    let line_height = effects.var(EffectVar::LineHeight);

    let mut format = TextFormat {
        font_id: font_id.clone(),
        color: ui.visuals().text_color(),
        ..Default::default()
    };
    format.extra_letter_spacing = letter;
    if line_height > 1.0 {
        format.line_height = Some(font_id.size * line_height);
    }

    let mut job = LayoutJob::default();
    job.wrap.max_width = ui.available_width();
    if word > 0.0 {
        // The extra word gap rides on the space character
        let mut gap = format.clone();
        gap.extra_letter_spacing = letter + word;
        for (i, piece) in text.split(' ').enumerate() {
            if i > 0 {
                job.append(" ", 0.0, gap.clone());
            }
            job.append(piece, 0.0, format.clone());
        }
    } else {
        job.append(text, 0.0, format);
    }

    ui.label(job);
    ui.add_space(8.0);
}

fn demo_link(ui: &mut Ui, effects: &PageEffects, text: &str) {
    let label = if effects.is_on(EffectFlag::HighlightLinks) {
        RichText::new(text)
            .underline()
            .strong()
            .background_color(ui.visuals().selection.bg_fill)
    } else {
        RichText::new(text)
    };
    if ui.link(label).clicked() {
        debug!("demo link activated: {}", text);
    }
}

/// Placeholder image, or its alt text when images are hidden.
fn image_figure(ui: &mut Ui, effects: &PageEffects, caption: &str, alt: &str) {
    if effects.is_on(EffectFlag::HideImages) {
        ui.label(RichText::new(alt).italics().weak());
        ui.add_space(8.0);
        return;
    }

    let width = ui.available_width().min(420.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 150.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        let border = ui.visuals().widgets.noninteractive.bg_stroke.color;
        let painter = ui.painter();
        painter.rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
        painter.rect_stroke(rect, 6.0, Stroke::new(1.0, border), StrokeKind::Inside);
        painter.line_segment(
            [rect.left_top(), rect.right_bottom()],
            Stroke::new(1.0, border),
        );
        painter.line_segment(
            [rect.right_top(), rect.left_bottom()],
            Stroke::new(1.0, border),
        );
    }
    ui.label(RichText::new(caption).weak().small());
    ui.add_space(8.0);
}

/// Pulsing dot that freezes when animations are stopped.
fn live_badge(ui: &mut Ui, effects: &PageEffects) {
    let frozen = effects.is_on(EffectFlag::StopAnimations);
    let time = if frozen { 0.0 } else { ui.input(|i| i.time) };
    let pulse = ((time * 2.0).sin() * 0.5 + 0.5) as f32;
    let radius = 4.0 + 3.0 * pulse;

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(18.0), Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), radius, Color32::from_rgb(242, 80, 86));
        ui.label("Tide gauge updating");
    });
    if !frozen {
        ui.ctx().request_repaint();
    }
    ui.add_space(12.0);
}
