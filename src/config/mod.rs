// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[report]` - Report base (URL or directory) and screen list location
//! - `[loading]` - Image load waiter poll intervals
//! - `[layout]` - Header band, footer margin and slider width
//! - `[actions]` - Remote action feedback
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `VDIFF_VIEWER_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use vdiff_viewer::config;
//!
//! let (mut config, _warning) = config::load();
//! config.report.base = Some("http://ci.local/job/web/42/vdiff".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::comparison::LayoutMetrics;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Which report to open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// `http(s)://` URL of a report page, or a local report directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Screen list location relative to a remote base.
    #[serde(default = "default_list_path")]
    pub list_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base: None,
            list_path: default_list_path(),
        }
    }
}

/// Poll intervals of the image load waiter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadingConfig {
    #[serde(
        default = "default_inline_poll_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_poll_interval_ms: Option<u64>,

    #[serde(
        default = "default_overlay_poll_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub overlay_poll_interval_ms: Option<u64>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            inline_poll_interval_ms: default_inline_poll_interval_ms(),
            overlay_poll_interval_ms: default_overlay_poll_interval_ms(),
        }
    }
}

impl LoadingConfig {
    /// Inline poll interval, clamped to the supported range.
    #[must_use]
    pub fn inline_interval(&self) -> Duration {
        clamp_poll_interval(
            self.inline_poll_interval_ms
                .unwrap_or(DEFAULT_INLINE_POLL_INTERVAL_MS),
        )
    }

    /// Overlay poll interval, clamped to the supported range.
    #[must_use]
    pub fn overlay_interval(&self) -> Duration {
        clamp_poll_interval(
            self.overlay_poll_interval_ms
                .unwrap_or(DEFAULT_OVERLAY_POLL_INTERVAL_MS),
        )
    }
}

/// Page bands around the inline comparison box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_header_band_px")]
    pub header_band_px: f32,

    #[serde(default = "default_footer_margin_px")]
    pub footer_margin_px: f32,

    #[serde(default = "default_slider_width_px")]
    pub slider_width_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_band_px: DEFAULT_HEADER_BAND_PX,
            footer_margin_px: DEFAULT_FOOTER_MARGIN_PX,
            slider_width_px: DEFAULT_SLIDER_WIDTH_PX,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            header_band: self.header_band_px.max(0.0),
            footer_margin: self.footer_margin_px.max(0.0),
            slider_width: self.slider_width_px.max(0.0),
        }
    }
}

/// Remote action feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActionsConfig {
    /// Show a notification when approve/delete/delete-all fails.
    /// Failures are silent when unset.
    #[serde(default)]
    pub notify_failures: bool,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub loading: LoadingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub actions: ActionsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_list_path() -> String {
    DEFAULT_LIST_PATH.to_string()
}

fn default_inline_poll_interval_ms() -> Option<u64> {
    Some(DEFAULT_INLINE_POLL_INTERVAL_MS)
}

fn default_overlay_poll_interval_ms() -> Option<u64> {
    Some(DEFAULT_OVERLAY_POLL_INTERVAL_MS)
}

fn default_header_band_px() -> f32 {
    DEFAULT_HEADER_BAND_PX
}

fn default_footer_margin_px() -> f32 {
    DEFAULT_FOOTER_MARGIN_PX
}

fn default_slider_width_px() -> f32 {
    DEFAULT_SLIDER_WIDTH_PX
}

/// Keeps poll intervals inside the supported range so the waiter neither
/// spins nor stalls visibly.
fn clamp_poll_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS))
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid settings file");
                    (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    )
                }
            };
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
