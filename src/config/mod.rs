// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Playback state (volume, position, current clip) is deliberately not
//! persisted; only the ambient preferences below survive a restart.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ClipLens";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// UI locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub language: Option<String>,
    /// Base URL the two catalog documents are fetched from.
    #[serde(default)]
    pub catalog_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            catalog_base_url: None,
        }
    }
}

impl Config {
    /// Returns the effective catalog base URL, falling back to the default.
    pub fn catalog_base_url(&self) -> &str {
        self.catalog_base_url
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_BASE_URL)
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
