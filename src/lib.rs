//! AccessPanel - Accessibility Preference Engine
//!
//! A reusable engine for user accessibility preferences: a persistent
//! preference store, adjustment modules that turn settings into page
//! effects, a declarative control binder, and an accessible panel
//! controller. Ships with an egui demo host that renders the panel over
//! a sample reading surface.

pub mod adjust;
pub mod config;
pub mod i18n;
pub mod panel;
pub mod prefs;
pub mod speech;
pub mod ui;

// Re-export commonly used types
pub use adjust::{AccessProfile, Adjuster, PageEffects};
pub use panel::{Announcer, ControlRegistry, PanelController};
pub use prefs::{FileBackend, MemoryBackend, PreferenceStore, Preferences, SettingKey};
