//! # Clear Command
//!
//! Removes every item from the list.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::ui;

/// Executes the clear command.
///
/// Without `--yes` a y/N prompt is shown on a terminal; in a pipe the
/// command refuses rather than guessing.
pub fn execute(yes: bool) -> Result<()> {
    if !yes && !confirm()? {
        println!("{}", "Aborted.".dimmed());
        return Ok(());
    }

    let engine = super::engine()?;
    engine.remove_all()?;

    ui::print_success("Removed all items");

    Ok(())
}

/// Asks for confirmation on stderr. Only prompts if running in a terminal.
fn confirm() -> Result<bool> {
    if !io::stdin().is_terminal() {
        anyhow::bail!("Refusing to clear the list without confirmation. Pass --yes.");
    }

    eprint!("{}", "Remove all items? [y/N] ".bold());
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}
