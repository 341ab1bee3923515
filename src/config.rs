//! Application configuration.
//!
//! Host options for the demo app, separate from the accessibility
//! preferences themselves: where the panel docks, hotkey, UI language
//! and speech output. Stored as TOML in the platform data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::prefs::backend::get_data_dir;

/// Which screen edge the panel docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelEdge {
    Left,
    #[default]
    Right,
}

impl std::fmt::Display for PanelEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelEdge::Left => write!(f, "Left"),
            PanelEdge::Right => write!(f, "Right"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Panel hosting options
    pub panel: PanelOptions,
    /// Language options
    pub locale: LocaleOptions,
    /// Speech output options
    pub speech: SpeechOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            panel: PanelOptions::default(),
            locale: LocaleOptions::default(),
            speech: SpeechOptions::default(),
        }
    }
}

/// Panel hosting options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelOptions {
    /// Edge the panel slides in from
    pub edge: PanelEdge,
    /// Panel width in points
    pub width: f32,
    /// Whether Alt+A toggles the panel
    pub hotkey_enabled: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            edge: PanelEdge::Right,
            width: 320.0,
            hotkey_enabled: true,
        }
    }
}

/// Language options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleOptions {
    /// Language identifier override; `None` follows the system locale
    pub language: Option<String>,
}

/// Speech output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechOptions {
    /// Whether the host offers spoken announcements at all
    pub enabled: bool,
    /// Speech rate multiplier
    pub rate: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 1.0,
        }
    }
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a specific path.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
