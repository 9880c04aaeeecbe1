//! # Add Command
//!
//! Appends a new item to the list.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::ui;

/// Executes the add command.
///
/// The description tokens arrive exactly as typed; normalization (joining,
/// trailing period) happens in the engine. Priority is already range-checked
/// by the CLI parser.
pub fn execute(description: &[String], priority: u8) -> Result<()> {
    let engine = super::engine()?;

    let item = engine.add(description, priority)?;

    ui::print_success(&format!(
        "Added \"{}\" with priority {}",
        item.description, item.priority
    ));

    Ok(())
}
