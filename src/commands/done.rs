//! # Done Command
//!
//! Marks the item at a given position as completed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::ui;

/// Executes the done command.
pub fn execute(position: usize) -> Result<()> {
    let engine = super::engine()?;

    let item = engine.mark_done(position)?;

    ui::print_success(&format!("Done \"{}\"", item.description));

    Ok(())
}
