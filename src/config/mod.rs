// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast capacity and per-kind auto-dismiss durations
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_HERALD_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory via the `dirs` crate
//!
//! A corrupt or unreadable file degrades to defaults with a warning string
//! the caller can surface; it is never fatal.

pub mod defaults;

// Re-export all default constants for use across the crate
pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_HERALD_CONFIG_DIR";

/// Directory name under the platform config directory.
const APP_DIR_NAME: &str = "IcedHerald";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Notification queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NotificationsConfig {
    /// Maximum number of concurrent toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,

    /// Auto-dismiss duration for success toasts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_duration_ms: Option<u64>,

    /// Auto-dismiss duration for info toasts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_duration_ms: Option<u64>,

    /// Auto-dismiss duration for warning toasts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_duration_ms: Option<u64>,

    /// Auto-dismiss duration for error toasts, in milliseconds.
    /// Absent means errors stay until dismissed by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_duration_ms: Option<u64>,
}

/// Persisted user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Returns the directory holding the settings file, if one can be resolved.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME))
}

/// Returns the full path of the settings file, if one can be resolved.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Loads the configuration from the resolved location.
///
/// Returns the configuration plus an optional warning describing why
/// defaults were substituted (missing directory resolution or a corrupt
/// file). A missing file is normal on first run and produces no warning.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (
            Config::default(),
            Some("could not resolve a configuration directory".to_string()),
        );
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("settings file ignored: {err}")),
        ),
    }
}

/// Saves the configuration to the resolved location.
///
/// # Errors
///
/// Returns an error if no config directory can be resolved or the file
/// cannot be written.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path() else {
        return Err(Error::Config(
            "could not resolve a configuration directory".to_string(),
        ));
    };
    save_to_path(config, &path)
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to an explicit path, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Manager, ToastKind};
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_toast_domain_values() {
        // The config layer and the toast entry module each state the kind
        // defaults; they must agree.
        assert_eq!(Manager::new().max_toasts(), DEFAULT_MAX_TOASTS);
        assert_eq!(
            ToastKind::Success.auto_dismiss_duration(),
            Some(Duration::from_millis(DEFAULT_SUCCESS_DURATION_MS))
        );
        assert_eq!(
            ToastKind::Info.auto_dismiss_duration(),
            Some(Duration::from_millis(DEFAULT_INFO_DURATION_MS))
        );
        assert_eq!(
            ToastKind::Warning.auto_dismiss_duration(),
            Some(Duration::from_millis(DEFAULT_WARNING_DURATION_MS))
        );
        assert_eq!(ToastKind::Error.auto_dismiss_duration(), None);
    }

    #[test]
    fn round_trip_preserves_values() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("settings.toml");

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            notifications: NotificationsConfig {
                max_toasts: Some(3),
                warning_duration_ms: Some(10_000),
                ..NotificationsConfig::default()
            },
        };
        save_to_path(&config, &path).expect("failed to save config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[general]\n").expect("failed to write file");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn corrupt_file_is_a_config_error() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not = [valid").expect("failed to write file");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("nested").join("deep").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("failed to save config");
        assert!(path.exists());
    }
}
