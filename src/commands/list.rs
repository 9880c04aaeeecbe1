//! # List Command
//!
//! Shows all items with their current positions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::ui;

/// Executes the list command.
///
/// A read failure is an error, never an empty table: an unreadable store
/// must not look like an empty list.
pub fn execute() -> Result<()> {
    let engine = super::engine()?;

    let items = engine.list()?;

    if items.is_empty() {
        ui::print_empty();
        return Ok(());
    }

    ui::print_items(&items);

    Ok(())
}
