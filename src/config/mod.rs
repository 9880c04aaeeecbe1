//! # Configuration
//!
//! Handles the global configuration stored at `~/.config/quicklist/config`.
//!
//! The config holds exactly one setting: the path of the list store. The
//! path is resolved here and handed to [`crate::store::Store`] explicitly,
//! so the core never reaches for ambient state.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::constants::{DATA_DIR, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME, STORE_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and store to a temp
    /// directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect the global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Returns the effective home directory, honoring the test override.
fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Global configuration stored at ~/.config/quicklist/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Path of the YAML file holding the list.
    pub store_path: PathBuf,
}

impl GlobalConfig {
    /// Creates a config pointing at the given store path, or the default
    /// location under `~/.local/share/quicklist/` when none is given.
    pub fn new(store_path: Option<PathBuf>) -> Result<Self> {
        let store_path = match store_path {
            Some(path) => path,
            None => Self::default_store_path()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        };
        Ok(Self { store_path })
    }

    /// Returns the path to the global config file (~/.config/quicklist/config)
    pub fn path() -> Option<PathBuf> {
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Returns the default store location (~/.local/share/quicklist/list.yml)
    pub fn default_store_path() -> Option<PathBuf> {
        home_dir().map(|home| {
            home.join(".local")
                .join("share")
                .join(DATA_DIR)
                .join(STORE_FILENAME)
        })
    }

    /// Loads the global config.
    /// Fails if the config doesn't exist — user must run `qkl init` first.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("No configuration found. Run {} first.", "qkl init".green());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Saves the config with a commented template explaining the setting.
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        // Serialize the single key through toml so the path is escaped
        // correctly, then wrap it in the commented template.
        let store_path_line = toml::to_string(self)
            .context("Failed to serialize config")?
            .trim_end()
            .to_string();

        let content = format!(
            r"# quicklist Configuration
# Location: ~/.config/quicklist/config

# Path of the YAML file holding your quick list.
# The whole list is rewritten on every change. Re-run `qkl init --force`
# with --store-path to move it somewhere else.
{store_path_line}
"
        );

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
