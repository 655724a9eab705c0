// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The configuration remembers where the portfolio manifest lives and the
//! last window size, so relaunching the viewer restores the previous session.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the portfolio manifest (`portfolio.toml`) opened on startup.
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub window_width: Option<f32>,
    #[serde(default)]
    pub window_height: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            window_width: Some(DEFAULT_WINDOW_WIDTH),
            window_height: Some(DEFAULT_WINDOW_HEIGHT),
        }
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
    fn default_config_has_no_catalog_path() {
        let config = Config::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.window_width, Some(DEFAULT_WINDOW_WIDTH));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            catalog_path: Some("/photos/portfolio.toml".to_string()),
            window_width: Some(1280.0),
            window_height: Some(800.0),
        };
        save_to_path(&config, &path).expect("save failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(
            loaded.catalog_path.as_deref(),
            Some("/photos/portfolio.toml")
        );
        assert_eq!(loaded.window_width, Some(1280.0));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not [valid toml").expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert!(loaded.catalog_path.is_none());
    }
}
