//! Settings loading from the file system
//!
//! Loads settings.json from next to the executable, or from an explicit
//! path override. Every failure falls back to defaults so the shell can
//! always start.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::error::{Result, ResultExt, ShellError};

use super::types::Settings;

/// File name looked up next to the executable when no override is given.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Load settings from disk.
///
/// `path_override` takes precedence over the default location and may use
/// `~` for the home directory. Returns `Settings::default()` if the file
/// is missing, unreadable, or not valid JSON.
#[instrument(name = "load_settings")]
pub fn load_settings(path_override: Option<&str>) -> Settings {
    let path = match path_override {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => default_settings_path(),
    };

    if !path.exists() {
        info!(path = %path.display(), "Settings file not found, using defaults");
        return Settings::default();
    }

    match try_load(&path) {
        Ok(settings) => {
            info!(path = %path.display(), "Successfully loaded settings");
            settings
        }
        Err(e) => {
            warn!(error = %e, "Failed to load settings, using defaults");
            Settings::default()
        }
    }
}

/// settings.json next to the executable, or the bare file name when the
/// executable path cannot be resolved.
fn default_settings_path() -> PathBuf {
    env::current_exe()
        .warn_on_err()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

fn try_load(path: &Path) -> Result<Settings> {
    let contents = std::fs::read_to_string(path).map_err(|source| ShellError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ShellError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}
