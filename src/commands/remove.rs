//! # Remove Command
//!
//! Removes the item at a given position from the list.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::ui;

/// Executes the remove command.
///
/// Items after the removed one shift down, so positions printed by an
/// earlier `qkl list` are stale once this returns.
pub fn execute(position: usize) -> Result<()> {
    let engine = super::engine()?;

    let item = engine.remove(position)?;

    ui::print_success(&format!("Removed \"{}\"", item.description));

    Ok(())
}
