//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EXPORT_SHORTCUT, DEFAULT_RESET_SHORTCUT,
};
use super::types::EditorConfig;
use crate::error::{Result, ThemeEditorError};

/// Default config location: `<config dir>/booxi-theme-editor/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from the default location.
///
/// Returns `EditorConfig::default()` if the file is missing or unreadable.
#[instrument(name = "load_config")]
pub fn load_config() -> EditorConfig {
    match default_config_path() {
        Some(path) => load_config_from(&path),
        None => {
            info!("No config directory on this platform, using defaults");
            EditorConfig::default()
        }
    }
}

/// Load configuration from `path`, falling back to defaults on any failure.
///
/// Individual bad shortcut bindings are reset to their defaults so one typo
/// does not discard the rest of the file.
pub fn load_config_from(path: &Path) -> EditorConfig {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return EditorConfig::default();
    }

    match try_load_config_from(path) {
        Ok(mut config) => {
            if let Err(e) = config.export_shortcut() {
                warn!(error = %e, "Invalid exportShortcut, using default");
                config.export_shortcut = DEFAULT_EXPORT_SHORTCUT.to_string();
            }
            if let Err(e) = config.reset_shortcut() {
                warn!(error = %e, "Invalid resetShortcut, using default");
                config.reset_shortcut = DEFAULT_RESET_SHORTCUT.to_string();
            }
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                error = %e,
                path = %path.display(),
                "Failed to load config, using defaults"
            );
            EditorConfig::default()
        }
    }
}

/// Strict variant of [`load_config_from`] that reports the failure.
pub fn try_load_config_from(path: &Path) -> Result<EditorConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ThemeEditorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str::<EditorConfig>(&contents)
        .map_err(|e| ThemeEditorError::Config(format!("{}: {}", path.display(), e)))
}
