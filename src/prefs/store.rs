//! The preference store: load, mutate, persist, migrate.

use serde_json::Value;
use tracing::{debug, warn};

use super::backend::{SettingsBackend, STORAGE_KEY};
use super::keys::{SettingKey, SettingKind, SettingValue};
use super::record::{Preferences, SCHEMA_VERSION};

/// Versioned preference store with write-through persistence.
///
/// Storage failures are logged and absorbed, never surfaced to callers:
/// the in-memory record stays authoritative so assistive features keep
/// working even when persistence is unavailable.
pub struct PreferenceStore<B: SettingsBackend> {
    backend: B,
    record: Preferences,
}

impl<B: SettingsBackend> PreferenceStore<B> {
    /// Create a store over the given backend and load whatever it holds.
    pub fn new(backend: B) -> Self {
        let mut store = Self {
            backend,
            record: Preferences::default(),
        };
        store.load();
        store
    }

    /// Read the persisted record. Absent, corrupt or foreign-version data
    /// never fails: defaults and migration cover every case.
    pub fn load(&mut self) -> &Preferences {
        match self.backend.get_item(STORAGE_KEY) {
            None => {
                debug!("no stored preferences, using defaults");
                self.record = Preferences::default();
            }
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Err(e) => {
                    warn!("stored preferences are unreadable, using defaults: {}", e);
                    self.record = Preferences::default();
                }
                Ok(value) => {
                    if value.get("version").and_then(Value::as_str) == Some(SCHEMA_VERSION) {
                        match serde_json::from_value::<Preferences>(value) {
                            Ok(mut prefs) => {
                                prefs.sanitize();
                                self.record = prefs;
                            }
                            Err(e) => {
                                warn!("stored preferences are malformed, using defaults: {}", e);
                                self.record = Preferences::default();
                            }
                        }
                    } else {
                        self.migrate(&value);
                    }
                }
            },
        }
        &self.record
    }

    /// Current value of a single setting.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        self.record.get(key)
    }

    /// Set a single setting. Scalars are clamped into bounds, never
    /// rejected. The change clears any active preset, stamps the record
    /// and persists it. Returns the value actually stored.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> SettingValue {
        match self.record.set_field(key, value) {
            Some(stored) => {
                self.record.active_profile = None;
                self.record.touch();
                self.persist();
                stored
            }
            None => {
                warn!("ignoring {} value for setting {}", value, key);
                self.record.get(key)
            }
        }
    }

    /// Record which preset produced the current field values. Used by
    /// preset application after its overrides have gone through `set`.
    pub fn set_active_profile(&mut self, profile: Option<&str>) {
        self.record.active_profile = profile.map(str::to_owned);
        self.record.touch();
        self.persist();
    }

    pub fn active_profile(&self) -> Option<&str> {
        self.record.active_profile.as_deref()
    }

    /// Defensive copy of the whole record.
    pub fn get_all(&self) -> Preferences {
        self.record.clone()
    }

    /// Replace the record with defaults and persist them. Idempotent.
    pub fn reset(&mut self) -> &Preferences {
        self.record = Preferences::default();
        self.persist();
        &self.record
    }

    /// Build a current-schema record from an older one: defaults overlaid
    /// with every old key that still exists, clamped and type checked.
    /// Keys the schema no longer knows drop out. The result is persisted
    /// under the current version and becomes the live record.
    pub fn migrate(&mut self, old: &Value) -> Preferences {
        let mut prefs = Preferences::default();
        let mut carried = 0usize;

        for key in SettingKey::all() {
            let Some(raw) = old.get(key.wire_name()) else {
                continue;
            };
            let value = match key.kind() {
                SettingKind::Toggle => raw.as_bool().map(SettingValue::Toggle),
                SettingKind::Scalar => raw.as_f64().map(|v| SettingValue::Scalar(v as f32)),
            };
            match value {
                Some(value) => {
                    prefs.set_field(key, value);
                    carried += 1;
                }
                None => warn!("dropping {} during migration: wrong type", key),
            }
        }

        if let Some(profile) = old.get("activeProfile").and_then(Value::as_str) {
            prefs.active_profile = Some(profile.to_string());
        }

        prefs.sanitize();
        prefs.touch();
        debug!("migrated stored preferences to schema {SCHEMA_VERSION} ({carried} keys carried)");

        self.record = prefs;
        self.persist();
        self.get_all()
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.record) {
            Ok(json) => {
                if let Err(e) = self.backend.set_item(STORAGE_KEY, &json) {
                    warn!("failed to persist preferences: {}", e);
                }
            }
            Err(e) => warn!("failed to serialize preferences: {}", e),
        }
    }
}
