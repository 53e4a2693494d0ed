// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read once at startup from
//! `<config dir>/sheet-animator/config.yaml`. Every field is optional; a
//! missing or unreadable file falls back to the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::editor::playback::{MAX_FPS, MIN_FPS};

const CONFIG_DIR_NAME: &str = "sheet-animator";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Startup settings for a new authoring session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Texture path written to exports until the user edits it
    pub texture_path: String,
    /// Initial grid cell width (pixels)
    pub cell_width: u32,
    /// Initial grid cell height (pixels)
    pub cell_height: u32,
    /// Name of the empty animation a new project starts with ("" for none)
    pub default_animation: String,
    /// Initial preview speed
    pub fps: u32,
    /// Whether the grid overlay starts visible
    pub show_grid: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            texture_path: "assets/textures/spritesheet.png".to_string(),
            cell_width: 64,
            cell_height: 128,
            default_animation: "idleDown".to_string(),
            fps: 12,
            show_grid: true,
        }
    }
}

impl AppConfig {
    /// Location of the configuration file, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::debug!("No config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No config file at {}, using default settings", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config file: {:#}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse configuration text and bring values into range.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.cell_width = self.cell_width.max(1);
        self.cell_height = self.cell_height.max(1);
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_yaml("cell_width: 32\ndefault_animation: walk\n").unwrap();
        assert_eq!(config.cell_width, 32);
        assert_eq!(config.cell_height, 128);
        assert_eq!(config.default_animation, "walk");
        assert_eq!(config.texture_path, "assets/textures/spritesheet.png");
        assert!(config.show_grid);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = AppConfig::from_yaml("cell_width: 0\ncell_height: 0\nfps: 500\n").unwrap();
        assert_eq!(config.cell_width, 1);
        assert_eq!(config.cell_height, 1);
        assert_eq!(config.fps, MAX_FPS);

        let config = AppConfig::from_yaml("fps: 0\n").unwrap();
        assert_eq!(config.fps, MIN_FPS);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("cell_width: [1, 2").is_err());
        assert!(AppConfig::from_yaml("cell_width: wide\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "texture_path: sprites/hero.png").unwrap();
        writeln!(file, "show_grid: false").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.texture_path, "sprites/hero.png");
        assert!(!config.show_grid);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("nope.yaml")).is_err());
    }
}
