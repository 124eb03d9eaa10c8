// SPDX-License-Identifier: MPL-2.0
//! This module handles the generator's settings, loaded from an optional
//! `settings.toml` file. Every field has a default, so a missing file or a
//! partial file is fine.
//!
//! # Examples
//!
//! ```no_run
//! use badge_icons::config::{self, BackendPreference, Config};
//! use std::path::PathBuf;
//!
//! // Load existing settings, or defaults
//! let mut config = config::load().unwrap_or_default();
//!
//! // Force the ImageMagick backend
//! config.backend = BackendPreference::Magick;
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.backend, BackendPreference::Magick);
//! ```

pub mod defaults;

use crate::error::Result;
use crate::infrastructure::magick::DEFAULT_PROGRAM;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "BadgeIcons";

/// Which rendering backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Native rasterizer when compiled in, otherwise ImageMagick.
    #[default]
    Auto,
    Native,
    /// Always shell out to ImageMagick.
    Magick,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the default `icons/` directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub backend: BackendPreference,
    pub magick_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            backend: BackendPreference::Auto,
            magick_program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Output directory, falling back to [`defaults::output_dir`].
    #[must_use]
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(defaults::output_dir)
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), %err, "Ignoring invalid settings file");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
