//! # Init Command
//!
//! Initializes the quicklist configuration and an empty list store.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, store::Store};

/// Arguments for the init command
pub struct InitArgs {
    /// Custom store location; defaults to ~/.local/share/quicklist/list.yml
    pub store_path: Option<PathBuf>,
    /// Overwrite an existing configuration
    pub force: bool,
}

/// Executes the init command.
pub fn execute(args: InitArgs) -> Result<()> {
    let config_path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Already initialized (found {}). Re-run with --force to overwrite.",
            config_path.display()
        );
    }

    let config = GlobalConfig::new(args.store_path)?;
    config.save()?;

    // An existing store is kept as-is so re-init never discards items.
    let store = Store::new(config.store_path.clone());
    if !store.path().exists() {
        store.save(&[]).context("Failed to create list store")?;
    }

    println!("{} Initialized quicklist", "✓".green());
    println!("  {} {}", "Config:".dimmed(), config_path.display());
    println!("  {} {}", "Store:".dimmed(), store.path().display());

    Ok(())
}
