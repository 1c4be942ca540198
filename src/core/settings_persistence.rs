//! Settings persistence
//!
//! Loads [`BoardSettings`] from a JSON file before the app is built, so the
//! window can be sized from it.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, e.g.
//! `~/.config/xfboard/settings.json`. Falls back to the working directory if no
//! configuration directory can be resolved.
//!
//! # Error Handling
//!
//! Loading never fails the program: a missing file means defaults, an unreadable
//! or malformed file means defaults plus a [`SettingsOrigin::Invalid`] that the
//! startup logger reports.

use super::{BoardSettings, CoreResult, SettingsOrigin};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFBoard") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_settings_from(path: &Path) -> CoreResult<Option<BoardSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str::<BoardSettings>(&contents)?;
    Ok(Some(settings))
}

/// Load settings from the default location, falling back to defaults
pub fn load_settings() -> (BoardSettings, SettingsOrigin) {
    let path = settings_path();
    match load_settings_from(&path) {
        Ok(Some(settings)) => (settings, SettingsOrigin::File { path }),
        Ok(None) => (BoardSettings::default(), SettingsOrigin::Defaults { path }),
        Err(e) => (
            BoardSettings::default(),
            SettingsOrigin::Invalid {
                path,
                reason: e.to_string(),
            },
        ),
    }
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings_to(path: &Path, settings: &BoardSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Log where the active settings came from
pub fn log_settings_origin(origin: &SettingsOrigin) {
    match origin {
        SettingsOrigin::File { path } => {
            tracing::info!("[SETTINGS] Loaded settings from {:?}", path);
        }
        SettingsOrigin::Defaults { path } => {
            tracing::info!(
                "[SETTINGS] No settings file found at {:?}. Using defaults.",
                path
            );
        }
        SettingsOrigin::Invalid { path, reason } => {
            tracing::warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path,
                reason
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoreError, PieceStyle};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("xfboard-test-{}-{}", name, std::process::id()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = scratch_path("missing");
        assert!(load_settings_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_saved_settings_load_back() {
        let path = scratch_path("saved");
        let settings = BoardSettings {
            piece_style: PieceStyle::Circles,
            title: "Board".to_string(),
            ..Default::default()
        };

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, Some(settings));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let result = load_settings_from(&path);
        assert!(matches!(result, Err(CoreError::SettingsSerialization(_))));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
