//! This module handles the crate's configuration, including loading and saving
//! host-application overrides to a `flash.toml` file.
//!
//! Every field is optional; the `resolved_*` accessors fall back to the
//! constants in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_flash::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Shorten the auto-dismiss duration
//! config.default_duration_ms = Some(3000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "flash.toml";
const APP_NAME: &str = "IcedFlash";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Toast width in pixels when neither payload nor caller supplies one.
    #[serde(default)]
    pub default_width_px: Option<u32>,
    /// Auto-dismiss duration in milliseconds. Zero disables auto-dismiss.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    /// Delay between exit transition start and detach, in milliseconds.
    #[serde(default)]
    pub remove_delay_ms: Option<u64>,
    /// Maximum number of toasts visible at once.
    #[serde(default)]
    pub max_visible: Option<usize>,
}

impl Config {
    #[must_use]
    pub fn resolved_width_px(&self) -> u32 {
        self.default_width_px.unwrap_or(DEFAULT_WIDTH_PX)
    }

    #[must_use]
    pub fn resolved_duration_ms(&self) -> u64 {
        self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS)
    }

    #[must_use]
    pub fn resolved_remove_delay_ms(&self) -> u64 {
        self.remove_delay_ms.unwrap_or(REMOVE_DELAY_MS)
    }

    #[must_use]
    pub fn resolved_max_visible(&self) -> usize {
        self.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_overrides() {
        let config = Config {
            default_width_px: Some(512),
            default_duration_ms: Some(3000),
            remove_delay_ms: Some(250),
            max_visible: Some(5),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("flash.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("flash.toml");
        fs::write(&config_path, "not = [valid toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let config = Config::default();
        assert_eq!(config.resolved_width_px(), DEFAULT_WIDTH_PX);
        assert_eq!(config.resolved_duration_ms(), DEFAULT_DURATION_MS);
        assert_eq!(config.resolved_remove_delay_ms(), REMOVE_DELAY_MS);
        assert_eq!(config.resolved_max_visible(), DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let toml_str = "default_duration_ms = 8000";
        let config: Config = toml::from_str(toml_str).expect("valid toml");
        assert_eq!(config.resolved_duration_ms(), 8000);
        assert_eq!(config.resolved_width_px(), DEFAULT_WIDTH_PX);
    }
}
