//! The binding table between panel controls and settings.
//!
//! Controls are declared in [`PANEL_LAYOUT`] by setting name, the way a
//! web host would tag elements with a `data-setting` attribute. The
//! registry resolves those names once at startup; anything it cannot
//! resolve is logged and skipped so one bad entry never takes the panel
//! down. All state shown by a control is mirrored here and refreshed
//! from the store, never computed by widgets.

use egui::Id;
use tracing::warn;

use crate::adjust::{AccessProfile, Adjuster, EffectTarget};
use crate::prefs::{Preferences, SettingKey, SettingKind, SettingValue, SettingsBackend};

/// Panel sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSection {
    Profiles,
    TextAdjustments,
    ContrastModes,
    ReadingAids,
    Content,
}

impl PanelSection {
    pub fn all() -> [PanelSection; 5] {
        [
            PanelSection::Profiles,
            PanelSection::TextAdjustments,
            PanelSection::ContrastModes,
            PanelSection::ReadingAids,
            PanelSection::Content,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            PanelSection::Profiles => "section-profiles",
            PanelSection::TextAdjustments => "section-text",
            PanelSection::ContrastModes => "section-contrast",
            PanelSection::ReadingAids => "section-reading",
            PanelSection::Content => "section-content",
        }
    }
}

/// What kind of widget a binding drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Switch,
    Slider,
    ContrastButton,
    ProfileButton,
}

/// What a control is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindTarget {
    Setting(SettingKey),
    Profile(AccessProfile),
}

/// One control in the panel.
#[derive(Debug, Clone)]
pub struct ControlBinding {
    pub id: Id,
    pub target: BindTarget,
    pub kind: ControlKind,
    pub section: PanelSection,
    pub label_key: &'static str,
    /// Mirrored on/pressed state for switches and buttons.
    pub checked: bool,
    /// Mirrored value for sliders.
    pub value: f32,
}

impl ControlBinding {
    /// Accessibility state attribute, mirroring what a web host would
    /// set: `aria-checked` on switches, `aria-pressed` on mode buttons.
    pub fn aria_state(&self) -> Option<(&'static str, bool)> {
        match self.kind {
            ControlKind::Switch => Some(("aria-checked", self.checked)),
            ControlKind::ContrastButton | ControlKind::ProfileButton => {
                Some(("aria-pressed", self.checked))
            }
            ControlKind::Slider => None,
        }
    }
}

/// A user gesture on a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Click or keyboard activation of a switch or button.
    Activate,
    /// Slider drag or keyboard adjustment.
    SetValue(f32),
}

/// The default panel: every setting and preset, grouped by section.
pub const PANEL_LAYOUT: &[(PanelSection, ControlKind, &str)] = &[
    (PanelSection::Profiles, ControlKind::ProfileButton, "low-vision"),
    (PanelSection::Profiles, ControlKind::ProfileButton, "seizure-safe"),
    (PanelSection::Profiles, ControlKind::ProfileButton, "adhd-friendly"),
    (PanelSection::Profiles, ControlKind::ProfileButton, "dyslexia-friendly"),
    (PanelSection::Profiles, ControlKind::ProfileButton, "screen-reader"),
    (PanelSection::TextAdjustments, ControlKind::Slider, "textScale"),
    (PanelSection::TextAdjustments, ControlKind::Slider, "pageZoom"),
    (PanelSection::TextAdjustments, ControlKind::Slider, "lineHeight"),
    (PanelSection::TextAdjustments, ControlKind::Slider, "letterSpacing"),
    (PanelSection::TextAdjustments, ControlKind::Slider, "wordSpacing"),
    (PanelSection::ContrastModes, ControlKind::ContrastButton, "highContrast"),
    (PanelSection::ContrastModes, ControlKind::ContrastButton, "darkContrast"),
    (PanelSection::ContrastModes, ControlKind::ContrastButton, "lightContrast"),
    (PanelSection::ContrastModes, ControlKind::ContrastButton, "invertColors"),
    (PanelSection::ContrastModes, ControlKind::Switch, "monochrome"),
    (PanelSection::ReadingAids, ControlKind::Switch, "dyslexiaFont"),
    (PanelSection::ReadingAids, ControlKind::Switch, "focusIndicators"),
    (PanelSection::ReadingAids, ControlKind::Switch, "largeCursor"),
    (PanelSection::ReadingAids, ControlKind::Switch, "readingGuide"),
    (PanelSection::ReadingAids, ControlKind::Switch, "readingMask"),
    (PanelSection::ReadingAids, ControlKind::Switch, "highlightLinks"),
    (PanelSection::ReadingAids, ControlKind::Switch, "highlightHeaders"),
    (PanelSection::Content, ControlKind::Switch, "stopAnimations"),
    (PanelSection::Content, ControlKind::Switch, "hideImages"),
    (PanelSection::Content, ControlKind::Switch, "muteSounds"),
    (PanelSection::Content, ControlKind::Switch, "textToSpeech"),
];

/// Resolved binding table.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: Vec<ControlBinding>,
}

impl ControlRegistry {
    /// Build the default panel.
    pub fn standard() -> Self {
        Self::from_layout(PANEL_LAYOUT)
    }

    /// Resolve a layout into bindings. Unknown names and kind mismatches
    /// are logged and skipped.
    pub fn from_layout(layout: &[(PanelSection, ControlKind, &str)]) -> Self {
        let mut controls = Vec::new();

        for (section, kind, name) in layout {
            let target = if *kind == ControlKind::ProfileButton {
                match AccessProfile::from_id(name) {
                    Some(profile) => BindTarget::Profile(profile),
                    None => {
                        warn!("unknown profile in panel layout, skipping: {}", name);
                        continue;
                    }
                }
            } else {
                match name.parse::<SettingKey>() {
                    Ok(key) => {
                        let wants_scalar = *kind == ControlKind::Slider;
                        if wants_scalar != (key.kind() == SettingKind::Scalar) {
                            warn!("control kind does not fit setting, skipping: {}", name);
                            continue;
                        }
                        BindTarget::Setting(key)
                    }
                    Err(e) => {
                        warn!("{} in panel layout, skipping control", e);
                        continue;
                    }
                }
            };

            let value = match target {
                BindTarget::Setting(key) => {
                    key.default_value().as_scalar().unwrap_or_default()
                }
                BindTarget::Profile(_) => 0.0,
            };

            controls.push(ControlBinding {
                id: Id::new(("panel-control", *name)),
                target,
                kind: *kind,
                section: *section,
                label_key: label_key(target),
                checked: false,
                value,
            });
        }

        Self { controls }
    }

    pub fn controls(&self) -> &[ControlBinding] {
        &self.controls
    }

    pub fn section_controls(&self, section: PanelSection) -> impl Iterator<Item = &ControlBinding> {
        self.controls.iter().filter(move |c| c.section == section)
    }

    pub fn get(&self, id: Id) -> Option<&ControlBinding> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Control ids in tab order, for the focus trap.
    pub fn tab_order(&self) -> Vec<Id> {
        self.controls.iter().map(|c| c.id).collect()
    }

    /// Route a gesture to the engine and refresh the mirrored state.
    /// Returns false for unknown controls or mismatched gestures, which
    /// are ignored.
    pub fn interact<B: SettingsBackend, T: EffectTarget>(
        &mut self,
        id: Id,
        interaction: Interaction,
        adjuster: &mut Adjuster<B, T>,
    ) -> bool {
        let Some(idx) = self.controls.iter().position(|c| c.id == id) else {
            warn!("interaction on unknown control, ignoring");
            return false;
        };
        let (target, kind, checked) = {
            let c = &self.controls[idx];
            (c.target, c.kind, c.checked)
        };

        match (kind, target, interaction) {
            (ControlKind::Slider, BindTarget::Setting(key), Interaction::SetValue(v)) => {
                let stored = adjuster.apply(key, SettingValue::Scalar(v));
                if let Some(v) = stored.as_scalar() {
                    self.controls[idx].value = v;
                }
                self.sync_profile_buttons(&adjuster.prefs());
                true
            }
            (ControlKind::Switch, BindTarget::Setting(key), Interaction::Activate) => {
                let stored = adjuster.apply(key, SettingValue::Toggle(!checked));
                if let Some(on) = stored.as_toggle() {
                    self.controls[idx].checked = on;
                }
                self.sync_profile_buttons(&adjuster.prefs());
                true
            }
            (ControlKind::ContrastButton, BindTarget::Setting(key), Interaction::Activate) => {
                adjuster.apply(key, SettingValue::Toggle(!checked));
                let prefs = adjuster.prefs();
                // One activation can clear a sibling, so the whole group
                // refreshes together.
                self.sync_contrast_buttons(&prefs);
                self.sync_profile_buttons(&prefs);
                true
            }
            (ControlKind::ProfileButton, BindTarget::Profile(profile), Interaction::Activate) => {
                let prefs = if checked {
                    adjuster.clear_profile(profile)
                } else {
                    adjuster.apply_profile(profile)
                };
                self.sync_ui(&prefs);
                true
            }
            _ => {
                warn!("gesture does not fit control, ignoring");
                false
            }
        }
    }

    /// Push every stored value into its control.
    pub fn sync_ui(&mut self, prefs: &Preferences) {
        for control in &mut self.controls {
            match control.target {
                BindTarget::Setting(key) => match prefs.get(key) {
                    SettingValue::Toggle(on) => control.checked = on,
                    SettingValue::Scalar(v) => control.value = v,
                },
                BindTarget::Profile(profile) => {
                    control.checked = prefs.active_profile.as_deref() == Some(profile.id());
                }
            }
        }
    }

    fn sync_contrast_buttons(&mut self, prefs: &Preferences) {
        for control in &mut self.controls {
            if control.kind != ControlKind::ContrastButton {
                continue;
            }
            if let BindTarget::Setting(key) = control.target {
                control.checked = prefs.get(key) == SettingValue::Toggle(true);
            }
        }
    }

    fn sync_profile_buttons(&mut self, prefs: &Preferences) {
        for control in &mut self.controls {
            if let BindTarget::Profile(profile) = control.target {
                control.checked = prefs.active_profile.as_deref() == Some(profile.id());
            }
        }
    }
}

fn label_key(target: BindTarget) -> &'static str {
    match target {
        BindTarget::Profile(AccessProfile::LowVision) => "profile-low-vision",
        BindTarget::Profile(AccessProfile::SeizureSafe) => "profile-seizure-safe",
        BindTarget::Profile(AccessProfile::AdhdFriendly) => "profile-adhd-friendly",
        BindTarget::Profile(AccessProfile::DyslexiaFriendly) => "profile-dyslexia-friendly",
        BindTarget::Profile(AccessProfile::ScreenReader) => "profile-screen-reader",
        BindTarget::Setting(key) => match key {
            SettingKey::TextScale => "label-text-scale",
            SettingKey::PageZoom => "label-page-zoom",
            SettingKey::LineHeight => "label-line-height",
            SettingKey::LetterSpacing => "label-letter-spacing",
            SettingKey::WordSpacing => "label-word-spacing",
            SettingKey::HighContrast => "label-high-contrast",
            SettingKey::DarkContrast => "label-dark-contrast",
            SettingKey::LightContrast => "label-light-contrast",
            SettingKey::InvertColors => "label-invert-colors",
            SettingKey::Monochrome => "label-monochrome",
            SettingKey::DyslexiaFont => "label-dyslexia-font",
            SettingKey::FocusIndicators => "label-focus-indicators",
            SettingKey::LargeCursor => "label-large-cursor",
            SettingKey::ReadingGuide => "label-reading-guide",
            SettingKey::ReadingMask => "label-reading-mask",
            SettingKey::HighlightLinks => "label-highlight-links",
            SettingKey::HighlightHeaders => "label-highlight-headers",
            SettingKey::StopAnimations => "label-stop-animations",
            SettingKey::HideImages => "label-hide-images",
            SettingKey::MuteSounds => "label-mute-sounds",
            SettingKey::TextToSpeech => "label-text-to-speech",
        },
    }
}
