// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Which viewer controls are rendered and whether zoom is allowed
//! - `[autoplay]` - Slideshow settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.autoplay.enabled = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::AutoplayDelay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Which viewer controls are rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_thumbnails: Option<bool>,

    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_navigation_arrows: Option<bool>,

    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_fullscreen_button: Option<bool>,

    /// Whether zooming in (keyboard, click, double-click) is permitted.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub allow_zoom: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_thumbnails: Some(true),
            show_navigation_arrows: Some(true),
            show_fullscreen_button: Some(true),
            allow_zoom: Some(true),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Delay between advances in milliseconds. Out-of-range values are clamped
    /// when the runtime configuration is built.
    #[serde(default = "default_delay_ms", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: Some(false),
            delay_ms: Some(DEFAULT_AUTOPLAY_DELAY_MS),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub autoplay: AutoplayConfig,
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_DELAY_MS)
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Configuration handed to the viewer widget by its host.
///
/// Every field is always valid: the autoplay delay is clamped by its type, so
/// a viewer can be built from any persisted or command-line input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub show_thumbnails: bool,
    pub show_navigation_arrows: bool,
    pub allow_zoom: bool,
    pub auto_play: bool,
    pub autoplay_delay: AutoplayDelay,
    pub show_fullscreen_button: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_thumbnails: true,
            show_navigation_arrows: true,
            allow_zoom: true,
            auto_play: false,
            autoplay_delay: AutoplayDelay::default(),
            show_fullscreen_button: true,
        }
    }
}

impl From<&Config> for ViewerConfig {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            show_thumbnails: config
                .display
                .show_thumbnails
                .unwrap_or(defaults.show_thumbnails),
            show_navigation_arrows: config
                .display
                .show_navigation_arrows
                .unwrap_or(defaults.show_navigation_arrows),
            allow_zoom: config.display.allow_zoom.unwrap_or(defaults.allow_zoom),
            auto_play: config.autoplay.enabled.unwrap_or(defaults.auto_play),
            autoplay_delay: config
                .autoplay
                .delay_ms
                .map_or(defaults.autoplay_delay, AutoplayDelay::new),
            show_fullscreen_button: config
                .display
                .show_fullscreen_button
                .unwrap_or(defaults.show_fullscreen_button),
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
                Ok(config) => {
                    tracing::info!("Configuration loaded from {:?}", path);
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!("Ignoring unreadable configuration {:?}: {}", path, err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    tracing::info!("Using default configuration");
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
