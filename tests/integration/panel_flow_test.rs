//! Integration tests for the full panel flow.
//!
//! Drives the engine the way the UI does, without rendering: controls
//! route gestures through the registry, the panel controller manages
//! state and focus, and announcements queue for the next frame.

use accesspanel::adjust::{AccessProfile, Adjuster, EffectFlag, EffectVar, PageEffects};
use accesspanel::panel::{Announcer, ControlRegistry, Interaction, PanelController};
use accesspanel::prefs::{MemoryBackend, PreferenceStore, SettingValue};
use accesspanel::ui::panel_view;
use egui::Id;

struct Harness {
    adjuster: Adjuster<MemoryBackend, PageEffects>,
    registry: ControlRegistry,
    panel: PanelController,
    announcer: Announcer,
}

impl Harness {
    fn new() -> Self {
        let backend = MemoryBackend::new();
        let mut adjuster = Adjuster::new(PreferenceStore::new(backend), PageEffects::new());
        adjuster.sync_all();

        let mut registry = ControlRegistry::standard();
        registry.sync_ui(&adjuster.prefs());

        let mut panel = PanelController::new();
        panel.set_tab_order(panel_view::tab_order(&registry));

        Self {
            adjuster,
            registry,
            panel,
            announcer: Announcer::new(),
        }
    }

    fn press(&mut self, name: &str) {
        self.registry.interact(
            Id::new(("panel-control", name)),
            Interaction::Activate,
            &mut self.adjuster,
        );
    }

    fn slide(&mut self, name: &str, value: f32) {
        self.registry.interact(
            Id::new(("panel-control", name)),
            Interaction::SetValue(value),
            &mut self.adjuster,
        );
    }

    fn control_checked(&self, name: &str) -> bool {
        self.registry
            .get(Id::new(("panel-control", name)))
            .map(|c| c.checked)
            .unwrap_or(false)
    }

    fn due_announcements(&mut self) -> Vec<String> {
        self.announcer.begin_frame();
        self.announcer.drain().into_iter().map(|a| a.text).collect()
    }
}

#[test]
fn test_open_adjust_close_restores_focus() {
    let mut h = Harness::new();
    let origin = Id::new("page-search-box");

    h.panel.open(Some(origin), &mut h.announcer);
    assert!(h.panel.is_open());
    // Focus lands on the first tab stop, the close button.
    assert_eq!(h.panel.trap().current(), Some(panel_view::close_button_id()));

    h.press("readingGuide");
    assert!(h.adjuster.effects().is_on(EffectFlag::ReadingGuide));

    let restore = h.panel.close(&mut h.announcer);
    assert_eq!(restore, Some(origin));
    assert!(!h.panel.trap().is_active());

    // The adjustment outlives the panel.
    assert!(h.adjuster.effects().is_on(EffectFlag::ReadingGuide));
}

#[test]
fn test_panel_lifecycle_announces_once_per_transition() {
    let mut h = Harness::new();

    h.panel.open(None, &mut h.announcer);
    h.panel.open(None, &mut h.announcer);
    assert_eq!(h.due_announcements().len(), 1);

    h.panel.close(&mut h.announcer);
    h.panel.close(&mut h.announcer);
    assert_eq!(h.due_announcements().len(), 1);
}

#[test]
fn test_profile_then_manual_edit_flow() {
    let mut h = Harness::new();
    h.panel.open(None, &mut h.announcer);

    h.press("low-vision");
    assert!(h.control_checked("low-vision"));
    assert!(h.control_checked("highContrast"));
    assert_eq!(h.adjuster.effects().var(EffectVar::TextScale), 150.0);

    h.slide("textScale", 175.0);

    // The manual edit keeps the preset's other settings but drops the
    // active marker, shown by the unchecked profile button.
    assert!(!h.control_checked("low-vision"));
    assert!(h.control_checked("highContrast"));
    assert_eq!(h.adjuster.effects().var(EffectVar::TextScale), 175.0);
    assert_eq!(h.adjuster.active_profile(), None);
}

#[test]
fn test_contrast_buttons_stay_mutually_exclusive() {
    let mut h = Harness::new();

    h.press("highContrast");
    h.press("darkContrast");
    h.press("invertColors");

    assert!(!h.control_checked("highContrast"));
    assert!(!h.control_checked("darkContrast"));
    assert!(h.control_checked("invertColors"));

    let effects = h.adjuster.effects();
    assert!(!effects.is_on(EffectFlag::HighContrast));
    assert!(!effects.is_on(EffectFlag::DarkContrast));
    assert!(effects.is_on(EffectFlag::InvertColors));

    // Grayscale stacks on top of whichever mode holds.
    h.press("monochrome");
    assert!(h.adjuster.effects().is_on(EffectFlag::Monochrome));
    assert!(h.adjuster.effects().is_on(EffectFlag::InvertColors));
}

#[test]
fn test_tab_order_brackets_controls_with_panel_buttons() {
    let h = Harness::new();
    let order = panel_view::tab_order(&h.registry);

    assert_eq!(order.first().copied(), Some(panel_view::close_button_id()));
    assert_eq!(order.last().copied(), Some(panel_view::reset_button_id()));
    assert_eq!(order.len(), h.registry.controls().len() + 2);
}

#[test]
fn test_focus_cycles_through_the_whole_panel() {
    let mut h = Harness::new();
    h.panel.open(None, &mut h.announcer);

    let order = panel_view::tab_order(&h.registry);
    for expected in order.iter().skip(1) {
        assert_eq!(h.panel.trap_mut().next(), Some(*expected));
    }
    // One more step wraps back to the close button.
    assert_eq!(h.panel.trap_mut().next(), Some(panel_view::close_button_id()));
}

#[test]
fn test_reset_clears_everything_and_updates_controls() {
    let mut h = Harness::new();

    h.press("dyslexia-friendly");
    h.slide("pageZoom", 150.0);
    h.press("hideImages");

    let prefs = h.adjuster.reset_all();
    h.registry.sync_ui(&prefs);

    assert!(!h.control_checked("dyslexia-friendly"));
    assert!(!h.control_checked("hideImages"));
    assert_eq!(
        h.registry
            .get(Id::new(("panel-control", "pageZoom")))
            .unwrap()
            .value,
        100.0
    );

    let effects = h.adjuster.effects();
    assert!(!effects.is_on(EffectFlag::DyslexiaFont));
    assert!(!effects.is_on(EffectFlag::HideImages));
    assert_eq!(effects.var(EffectVar::PageZoom), 100.0);
    assert_eq!(effects.var(EffectVar::LineHeight), 1.0);
}

#[test]
fn test_adjustments_persist_across_panel_sessions() {
    let backend = MemoryBackend::new();

    {
        let mut adjuster = Adjuster::new(
            PreferenceStore::new(backend.clone()),
            PageEffects::new(),
        );
        let mut registry = ControlRegistry::standard();
        registry.sync_ui(&adjuster.prefs());
        registry.interact(
            Id::new(("panel-control", "stopAnimations")),
            Interaction::Activate,
            &mut adjuster,
        );
        registry.interact(
            Id::new(("panel-control", "lineHeight")),
            Interaction::SetValue(2.5),
            &mut adjuster,
        );
    }

    // A fresh engine over the same backend sees the stored state and
    // mirrors it into a fresh set of controls.
    let mut adjuster = Adjuster::new(PreferenceStore::new(backend), PageEffects::new());
    adjuster.sync_all();
    let mut registry = ControlRegistry::standard();
    registry.sync_ui(&adjuster.prefs());

    assert!(registry
        .get(Id::new(("panel-control", "stopAnimations")))
        .unwrap()
        .checked);
    assert_eq!(
        registry
            .get(Id::new(("panel-control", "lineHeight")))
            .unwrap()
            .value,
        2.5
    );
    assert!(adjuster.effects().is_on(EffectFlag::StopAnimations));
    assert_eq!(adjuster.effects().var(EffectVar::LineHeight), 2.5);
}
