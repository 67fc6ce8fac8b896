// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[preview]` - Frame height, overlay timings and preview hosts
//! - `[registry.<component-id>]` - Extra or overriding preview locators
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FLUTTER_PREVIEW_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use flutter_preview::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::preview::{ComponentRegistry, Endpoints, Locator, ThemePreference, Timings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemePreference,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Preview panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Frame height in pixels.
    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Minimum time the loading overlay stays up (ms).
    #[serde(
        default = "default_min_display_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_display_ms: Option<u64>,

    /// Overlay fade-out duration (ms).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Longest wait for the surface before the overlay is dismissed (ms).
    #[serde(
        default = "default_max_wait_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_wait_ms: Option<u64>,

    /// Sandbox host for `github` locators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_base: Option<String>,

    /// Origin serving `local` locators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_origin: Option<String>,

    /// Documentation page whose `#usage` anchor the setup panel links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            min_display_ms: default_min_display_ms(),
            fade_ms: default_fade_ms(),
            max_wait_ms: default_max_wait_ms(),
            sandbox_base: None,
            local_origin: None,
            docs_url: None,
        }
    }
}

impl PreviewConfig {
    /// Frame height clamped to the supported range.
    #[must_use]
    pub fn height(&self) -> u32 {
        clamp_height(self.height.unwrap_or(DEFAULT_PREVIEW_HEIGHT))
    }

    /// Overlay timings with out-of-range values clamped.
    #[must_use]
    pub fn timings(&self) -> Timings {
        Timings::from_millis(
            self.min_display_ms.unwrap_or(DEFAULT_MIN_DISPLAY_MS),
            self.fade_ms.unwrap_or(DEFAULT_FADE_MS),
            self.max_wait_ms.unwrap_or(DEFAULT_MAX_WAIT_MS),
        )
    }

    /// Preview hosts, falling back to the defaults when either is invalid.
    ///
    /// The second element is an i18n warning key when a fallback happened.
    #[must_use]
    pub fn endpoints(&self) -> (Endpoints, Option<String>) {
        let sandbox = self.sandbox_base.as_deref().unwrap_or(DEFAULT_SANDBOX_BASE);
        let origin = self.local_origin.as_deref().unwrap_or(DEFAULT_LOCAL_ORIGIN);
        match Endpoints::new(sandbox, origin) {
            Ok(endpoints) => (endpoints, None),
            Err(err) => {
                tracing::warn!(error = %err, "invalid preview endpoint, using defaults");
                (
                    Endpoints::default(),
                    Some("notification-config-endpoint-error".to_string()),
                )
            }
        }
    }
}

/// Clamps a frame height to the supported range.
#[must_use]
pub fn clamp_height(height: u32) -> u32 {
    height.clamp(MIN_PREVIEW_HEIGHT, MAX_PREVIEW_HEIGHT)
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Preview panel settings.
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Locators added to, or replacing, the built-in registry.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub registry: BTreeMap<String, Locator>,
}

impl Config {
    /// Built-in registry merged with the configured entries.
    #[must_use]
    pub fn component_registry(&self) -> ComponentRegistry {
        ComponentRegistry::builtin().with_overrides(self.registry.clone())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemePreference {
    ThemePreference::System
}

fn default_height() -> Option<u32> {
    Some(DEFAULT_PREVIEW_HEIGHT)
}

fn default_min_display_ms() -> Option<u64> {
    Some(DEFAULT_MIN_DISPLAY_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_max_wait_ms() -> Option<u64> {
    Some(DEFAULT_MAX_WAIT_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemePreference, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemePreference::Light),
        "dark" => Ok(ThemePreference::Dark),
        "system" => Ok(ThemePreference::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
