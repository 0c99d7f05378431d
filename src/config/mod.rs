// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! User preferences that change at runtime (theme, language, sidebar state)
//! do not live here: they are persisted through [`crate::storage`]. This file
//! holds deployment-level settings a user edits by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language used on first run
//! - `[backend]` - Backend base URL and request timeout
//! - `[sidebar]` - Hover-intent delays of the server info card
//!
//! # Examples
//!
//! ```no_run
//! use ipelfs_dash::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.backend.base_url = "http://127.0.0.1:40000".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths::{self, DirKind};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language tag (`en`, `zh`) used until the user picks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the ipelfs backend (e.g. `http://localhost:33330`).
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Timeout applied to REST requests, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
        )
    }
}

/// Sidebar server-info card settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarConfig {
    #[serde(default = "default_show_delay_ms")]
    pub hover_show_delay_ms: u64,

    #[serde(default = "default_hide_delay_ms")]
    pub hover_hide_delay_ms: u64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            hover_show_delay_ms: default_show_delay_ms(),
            hover_hide_delay_ms: default_hide_delay_ms(),
        }
    }
}

impl SidebarConfig {
    #[must_use]
    pub fn show_delay(&self) -> Duration {
        clamp_hover_delay(self.hover_show_delay_ms)
    }

    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        clamp_hover_delay(self.hover_hide_delay_ms)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_show_delay_ms() -> u64 {
    DEFAULT_HOVER_SHOW_DELAY_MS
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HOVER_HIDE_DELAY_MS
}

fn clamp_hover_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_HOVER_DELAY_MS, MAX_HOVER_DELAY_MS))
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::resolve(DirKind::Config, base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults plus
/// the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load config, using defaults");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh".to_string()),
            },
            backend: BackendConfig {
                base_url: "http://10.0.0.2:33330".to_string(),
                request_timeout_secs: 9,
            },
            sidebar: SidebarConfig {
                hover_show_delay_ms: 200,
                hover_hide_delay_ms: 250,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[backend\nbase_url = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[sidebar]\nhover_show_delay_ms = 200\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.backend, BackendConfig::default());
        assert_eq!(loaded.sidebar.hover_show_delay_ms, 200);
        assert_eq!(loaded.sidebar.hover_hide_delay_ms, DEFAULT_HOVER_HIDE_DELAY_MS);
    }

    #[test]
    fn delays_and_timeouts_are_clamped() {
        let sidebar = SidebarConfig {
            hover_show_delay_ms: 0,
            hover_hide_delay_ms: 60_000,
        };
        assert_eq!(sidebar.show_delay(), Duration::from_millis(MIN_HOVER_DELAY_MS));
        assert_eq!(sidebar.hide_delay(), Duration::from_millis(MAX_HOVER_DELAY_MS));

        let backend = BackendConfig {
            request_timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert_eq!(
            backend.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
    }
}
