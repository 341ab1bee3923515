//! Runtime translation overrides.
//!
//! Translators can drop `<language-id>.ftl` files into the `locales`
//! directory under the app's data dir. Their entries shadow the embedded
//! ones at startup; broken files are skipped with a warning.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{apply_overrides, parse_ftl, Language};

/// Directory scanned for override files.
pub fn overrides_dir() -> PathBuf {
    crate::prefs::backend::get_data_dir().join("locales")
}

/// Load every override file present under the data directory.
pub fn load_overrides() {
    load_overrides_from(&overrides_dir());
}

/// Load override files from a specific directory. A missing directory is
/// fine; individual read failures only cost that language its overrides.
pub fn load_overrides_from(dir: &Path) {
    if !dir.is_dir() {
        return;
    }

    for lang in Language::all() {
        let path = dir.join(format!("{}.ftl", lang.id()));
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let entries = parse_ftl(&content);
                debug!("loaded {} translation overrides for {}", entries.len(), lang.id());
                apply_overrides(*lang, entries);
            }
            Err(e) => warn!("failed to read translation overrides {}: {}", path.display(), e),
        }
    }
}
