//! Versioned accessibility preferences: schema, record, storage backends
//! and the write-through store.

pub mod backend;
pub mod keys;
pub mod record;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, SettingsBackend, StorageError, STORAGE_KEY};
pub use keys::{SettingKey, SettingKind, SettingValue, UnknownSetting};
pub use record::{Preferences, SCHEMA_VERSION};
pub use store::PreferenceStore;
