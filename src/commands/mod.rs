//! # Commands
//!
//! CLI command implementations for quicklist.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod clear;
pub mod completions;
pub mod done;
pub mod init;
pub mod list;
pub mod remove;

use anyhow::Result;

use crate::{config::GlobalConfig, engine::ListEngine, store::Store};

pub use self::{
    add::execute as add,
    clear::execute as clear,
    completions::execute as completions,
    done::execute as done,
    init::{execute as init, InitArgs},
    list::execute as list,
    remove::execute as remove,
};

/// Builds the engine over the configured store.
///
/// Fails with the "run qkl init" hint when no configuration exists yet.
pub(crate) fn engine() -> Result<ListEngine> {
    let config = GlobalConfig::load()?;
    Ok(ListEngine::new(Store::new(config.store_path)))
}
