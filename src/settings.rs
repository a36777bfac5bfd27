//! Panel settings.
//!
//! Settings are read once at startup and never written back:
//! - native: `<config dir>/la-musique/settings.json`
//! - web: LocalStorage key `la-musique.panel_settings`
//!
//! Anything missing or unreadable falls back to [`PanelSettings::default`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "la-musique";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";
#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "la-musique.panel_settings";

/// Display settings for the song output panel and its notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// How long a toast stays on screen before it is dismissed.
    pub toast_duration_ms: u32,
    /// Oldest toasts are dropped once more than this many are visible.
    pub max_visible_toasts: usize,
    pub melody_structure_max_height_px: u32,
    pub show_visualization_placeholder: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
            max_visible_toasts: 3,
            melody_structure_max_height_px: 100,
            show_visualization_placeholder: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read settings from {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("browser storage unavailable: {0}")]
    Storage(String),
}

/// Parse settings JSON. Unknown keys are ignored and missing keys take defaults.
pub fn parse(contents: &str) -> Result<PanelSettings, SettingsError> {
    Ok(serde_json::from_str(contents)?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// Load settings from disk. `Ok(None)` means no settings file exists.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Result<Option<PanelSettings>, SettingsError> {
    let started_at = std::time::Instant::now();
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    if !path.exists() {
        return Ok(None);
    }

    let contents =
        std::fs::read_to_string(&path).map_err(|e| SettingsError::Read(path.clone(), e))?;
    let settings = parse(&contents)?;
    crate::diagnostics::log_perf("settings::load", started_at, &path.display().to_string());
    Ok(Some(settings))
}

/// Load settings from LocalStorage. `Ok(None)` means nothing is stored yet.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Result<Option<PanelSettings>, SettingsError> {
    match LocalStorage::get::<PanelSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(Some(settings)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(StorageError::SerdeError(e)) => Err(SettingsError::Parse(e)),
        Err(e) => Err(SettingsError::Storage(e.to_string())),
    }
}

/// Load settings, logging and falling back to defaults on any failure.
pub fn load_or_default() -> PanelSettings {
    match load() {
        Ok(Some(settings)) => {
            tracing::info!("Loaded panel settings");
            settings
        }
        Ok(None) => {
            tracing::info!("No panel settings found, using defaults");
            PanelSettings::default()
        }
        Err(e) => {
            tracing::warn!("{e}; using default panel settings");
            PanelSettings::default()
        }
    }
}
