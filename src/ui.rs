//! # UI Utilities
//!
//! Shared terminal output helpers for table formatting and success messages.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

use crate::{
    constants::{UI_COL_DONE_WIDTH, UI_COL_POS_WIDTH, UI_COL_PRIORITY_WIDTH},
    item::Item,
};

/// Renders items as a table, numbering them by their 1-based position.
///
/// The position column is the handle for `done` and `remove`, so the table
/// always shows the current ordering of the stored list.
pub fn print_items(items: &[Item]) {
    let header = format!(
        "{:<pos$}  {:<pri$}  {:<done$}  {}",
        "#",
        "Priority",
        "Done",
        "Description",
        pos = UI_COL_POS_WIDTH,
        pri = UI_COL_PRIORITY_WIDTH,
        done = UI_COL_DONE_WIDTH,
    );

    println!();
    println!("{}", header.blue().bold());
    println!("{}", "-".repeat(header.len()).blue());

    for (index, item) in items.iter().enumerate() {
        let priority = format!("({})", item.priority);
        let row = format!(
            "{:<pos$}  {:<pri$}  {:<done$}  {}",
            index + 1,
            priority,
            if item.done { "x" } else { "-" },
            item.description,
            pos = UI_COL_POS_WIDTH,
            pri = UI_COL_PRIORITY_WIDTH,
            done = UI_COL_DONE_WIDTH,
        );
        println!("{}", row.blue());
    }

    println!();
}

/// Prints a success message with a green check prefix.
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Prints the dimmed empty-list notice.
pub fn print_empty() {
    println!("{}", "The list is empty.".dimmed());
}
