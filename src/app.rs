//! Main application state and egui integration.

use eframe::egui;

use accesspanel::adjust::{Adjuster, PageEffects};
use accesspanel::config::{AppConfig, PanelEdge};
use accesspanel::i18n::{self, t, Language};
use accesspanel::panel::{Announcer, ControlRegistry, PanelController, Priority};
use accesspanel::prefs::{FileBackend, PreferenceStore};
use accesspanel::speech::{self, SpeechSynth};
use accesspanel::ui::demo::DemoPage;
use accesspanel::ui::theme::FocusIndicatorStyle;
use accesspanel::ui::widgets::{accessible_icon_button, AccessibleButtonStyle};
use accesspanel::ui::{overlays, panel_view, BaseTheme, PageStyler};

/// Main application state.
pub struct AccessPanelApp {
    /// Application configuration
    config: AppConfig,
    /// Preference engine wired to the on-disk store and the page
    adjuster: Adjuster<FileBackend, PageEffects>,
    /// Panel control bindings
    registry: ControlRegistry,
    /// Panel open/close state and focus trap
    panel: PanelController,
    /// Screen reader announcement queue
    announcer: Announcer,
    /// Spoken output for announcements
    synth: Box<dyn SpeechSynth>,
    /// Style rebuilder holding the pristine baseline
    styler: PageStyler,
    /// Theme used when no contrast mode is active
    base_theme: BaseTheme,
    /// Sample content the adjustments act on
    demo: DemoPage,
    /// Panel rect from this frame, for outside-click detection
    panel_rect: Option<egui::Rect>,
    /// Toggle button rect from this frame
    toggle_rect: Option<egui::Rect>,
    /// Widget to focus once the panel has closed
    restore_focus: Option<egui::Id>,
}

impl AccessPanelApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = accesspanel::config::load_config().unwrap_or_default();

        i18n::init();
        let language = config
            .locale
            .language
            .as_deref()
            .and_then(Language::from_id)
            .unwrap_or_else(i18n::detect_system_language);
        i18n::set_language(language);
        i18n::loader::load_overrides();

        let store = PreferenceStore::new(FileBackend::new());
        let mut adjuster = Adjuster::new(store, PageEffects::new());
        adjuster.sync_all();

        let mut registry = ControlRegistry::standard();
        registry.sync_ui(&adjuster.prefs());

        let mut panel = PanelController::new();
        panel.set_tab_order(panel_view::tab_order(&registry));

        let synth = speech::default_synth(config.speech.rate);

        let base_theme = BaseTheme::from_system();
        cc.egui_ctx.set_visuals(base_theme.visuals());
        let styler = PageStyler::capture(&cc.egui_ctx);

        Self {
            config,
            adjuster,
            registry,
            panel,
            announcer: Announcer::new(),
            synth,
            styler,
            base_theme,
            demo: DemoPage::new(),
            panel_rect: None,
            toggle_rect: None,
            restore_focus: None,
        }
    }

    /// Log announcements queued last frame and speak them when the user
    /// asked for spoken output.
    fn speak_announcements(&mut self) {
        let prefs = self.adjuster.prefs();
        for announcement in self.announcer.drain() {
            match announcement.priority {
                Priority::Assertive => {
                    tracing::info!("announce (assertive): {}", announcement.text)
                }
                Priority::Polite => tracing::info!("announce: {}", announcement.text),
            }
            if self.config.speech.enabled && prefs.text_to_speech {
                if let Err(e) = self.synth.speak(&announcement.text) {
                    tracing::warn!("speech output failed: {}", e);
                }
            }
        }
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if self.config.panel.hotkey_enabled
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::ALT, egui::Key::A))
        {
            let previous = ctx.memory(|m| m.focused());
            self.toggle_panel(previous);
        }

        if self.panel.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_panel();
        }
    }

    /// Flip the panel. Controls are refreshed from the store whenever it
    /// opens, so they cannot drift from persisted state.
    fn toggle_panel(&mut self, previous: Option<egui::Id>) {
        if let Some(restore) = self.panel.toggle(previous, &mut self.announcer) {
            self.restore_focus = Some(restore);
        }
        if self.panel.is_open() {
            self.registry.sync_ui(&self.adjuster.prefs());
        }
    }

    fn close_panel(&mut self) {
        if let Some(restore) = self.panel.close(&mut self.announcer) {
            self.restore_focus = Some(restore);
        }
    }

    /// Render the side panel. Returns true when the close button was
    /// activated.
    fn show_panel(&mut self, ctx: &egui::Context) -> bool {
        let mut close_requested = false;

        let side = match self.config.panel.edge {
            PanelEdge::Left => egui::SidePanel::left("access-panel"),
            PanelEdge::Right => egui::SidePanel::right("access-panel"),
        };
        let response = side
            .resizable(false)
            .default_width(self.config.panel.width)
            .show_animated(ctx, self.panel.is_open(), |ui| {
                close_requested = panel_view::show_panel(
                    ui,
                    &mut self.registry,
                    &mut self.adjuster,
                    &mut self.panel,
                    &mut self.announcer,
                );
            });

        self.panel_rect = response.map(|r| r.response.rect);
        close_requested
    }

    /// Floating button that opens and closes the panel.
    fn show_toggle_button(&mut self, ctx: &egui::Context) {
        let focus_style = if self.adjuster.prefs().focus_indicators {
            FocusIndicatorStyle::enhanced()
        } else {
            FocusIndicatorStyle::standard()
        };

        let area = egui::Area::new(egui::Id::new("panel-toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                let label = t("panel-toggle");
                let response = ui.add(
                    accessible_icon_button("\u{267F}", &label)
                        .style(AccessibleButtonStyle::primary())
                        .focus_style(focus_style),
                );
                if response.clicked() {
                    let previous = ui.ctx().memory(|m| m.focused()).or(Some(response.id));
                    self.toggle_panel(previous);
                }
                response.rect
            });

        self.toggle_rect = Some(area.inner);
    }

    /// A press outside the panel and its toggle closes the panel.
    fn handle_outside_click(&mut self, ctx: &egui::Context) {
        if !self.panel.is_open() {
            return;
        }
        let pressed_at = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        let Some(pos) = pressed_at else {
            return;
        };

        let inside_panel = self.panel_rect.is_some_and(|r| r.contains(pos));
        let on_toggle = self.toggle_rect.is_some_and(|r| r.contains(pos));
        if !inside_panel && !on_toggle {
            self.close_panel();
        }
    }
}

impl eframe::App for AccessPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Announcements queued last frame come out first
        self.speak_announcements();

        // Style the whole frame from the current effects
        self.styler
            .apply(ctx, self.adjuster.effects(), self.base_theme);

        self.handle_hotkeys(ctx);

        let close_requested = self.show_panel(ctx);
        self.show_toggle_button(ctx);
        if close_requested {
            self.close_panel();
        }
        self.handle_outside_click(ctx);

        let effects = self.adjuster.effects().clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.demo.show(ui, &effects);
        });

        overlays::draw_overlays(ctx, self.adjuster.effects());

        // Restore focus to where it was before the panel opened
        if !self.panel.is_open() {
            if let Some(id) = self.restore_focus.take() {
                ctx.memory_mut(|m| m.request_focus(id));
            }
        }

        self.announcer.begin_frame();
    }
}
