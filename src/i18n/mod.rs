//! Internationalization for panel labels and announcements.
//!
//! Translations are simple key-value pairs parsed from embedded Fluent
//! files. Runtime override files from the data directory shadow the
//! embedded entries, so translations can be fixed without rebuilding.

pub mod loader;

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
}

impl Language {
    /// Get the language identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
        }
    }

    /// Parse from a language identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        if id.starts_with("en") {
            Some(Language::English)
        } else if id.starts_with("es") {
            Some(Language::Spanish)
        } else if id.starts_with("fr") {
            Some(Language::French)
        } else if id.starts_with("de") {
            Some(Language::German)
        } else if id.starts_with("it") {
            Some(Language::Italian)
        } else {
            None
        }
    }

    /// Get all supported languages.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::German,
            Language::Italian,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Key-value translation store with an override layer.
struct TranslationStore {
    current_language: Language,
    embedded: HashMap<Language, HashMap<String, String>>,
    overrides: HashMap<Language, HashMap<String, String>>,
}

impl TranslationStore {
    fn new() -> Self {
        let mut embedded = HashMap::new();
        for lang in Language::all() {
            embedded.insert(*lang, parse_ftl(embedded_ftl(*lang)));
        }
        Self {
            current_language: Language::English,
            embedded,
            overrides: HashMap::new(),
        }
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&String> {
        self.overrides
            .get(&lang)
            .and_then(|map| map.get(key))
            .or_else(|| self.embedded.get(&lang).and_then(|map| map.get(key)))
    }

    fn translate(&self, key: &str) -> String {
        if let Some(value) = self.lookup(self.current_language, key) {
            return value.clone();
        }

        // Fall back to English, then to the key itself.
        if self.current_language != Language::English {
            if let Some(value) = self.lookup(Language::English, key) {
                return value.clone();
            }
        }

        key.to_string()
    }

    fn apply_overrides(&mut self, lang: Language, entries: HashMap<String, String>) {
        self.overrides.entry(lang).or_default().extend(entries);
    }
}

fn embedded_ftl(lang: Language) -> &'static str {
    match lang {
        Language::English => include_str!("locales/en-US/main.ftl"),
        Language::Spanish => include_str!("locales/es/main.ftl"),
        Language::French => include_str!("locales/fr/main.ftl"),
        Language::German => include_str!("locales/de/main.ftl"),
        Language::Italian => include_str!("locales/it/main.ftl"),
    }
}

/// Parse the key-value subset of Fluent syntax.
pub(crate) fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Global translation store.
static TRANSLATION_STORE: OnceLock<Mutex<TranslationStore>> = OnceLock::new();

fn store() -> &'static Mutex<TranslationStore> {
    TRANSLATION_STORE.get_or_init(|| Mutex::new(TranslationStore::new()))
}

/// Initialize the translation system.
pub fn init() {
    let _ = store();
}

/// Translate a message by key.
pub fn t(key: &str) -> String {
    store().lock().unwrap().translate(key)
}

/// Translate a message with argument substitution.
/// Arguments are substituted for `{ $key }` patterns.
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key);
    for (arg_key, arg_value) in args {
        let pattern = format!("{{ ${} }}", arg_key);
        result = result.replace(&pattern, arg_value);
        let pattern_no_space = format!("{{${}}}", arg_key);
        result = result.replace(&pattern_no_space, arg_value);
    }
    result
}

/// Get the current language.
pub fn current_language() -> Language {
    store().lock().unwrap().current_language
}

/// Set the current language.
pub fn set_language(lang: Language) {
    store().lock().unwrap().current_language = lang;
}

/// Merge override entries for a language on top of the embedded ones.
pub fn apply_overrides(lang: Language, entries: HashMap<String, String>) {
    store().lock().unwrap().apply_overrides(lang, entries);
}

/// Where the user's locale comes from. Swappable for tests.
pub trait LocaleDetector {
    fn locale(&self) -> Option<String>;
}

/// Detector backed by the operating system.
pub struct SystemLocaleDetector;

impl LocaleDetector for SystemLocaleDetector {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Best matching language for the detected locale.
pub fn detect_language(detector: &dyn LocaleDetector) -> Language {
    detector
        .locale()
        .and_then(|locale| Language::from_id(&locale))
        .unwrap_or_default()
}

/// Best matching language for the system locale.
pub fn detect_system_language() -> Language {
    detect_language(&SystemLocaleDetector)
}

/// Macro for convenient translation.
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::t($key)
    };
    ($key:expr, $($arg_name:expr => $arg_value:expr),+ $(,)?) => {
        $crate::i18n::t_args($key, &[$(($arg_name, &$arg_value.to_string())),+])
    };
}
