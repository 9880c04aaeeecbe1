//! # Item
//!
//! Represents a single quick-list entry.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::{Deserialize, Serialize};

/// A single list entry.
///
/// Items carry no identifier of their own: they are addressed by their
/// 1-based position in the stored sequence, so removing an item shifts the
/// position of everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// What needs doing. Always ends with a terminating period.
    pub description: String,

    /// Priority from 1 (high) to 3 (low). Range-checked at the CLI boundary.
    pub priority: u8,

    /// Whether the item has been completed.
    #[serde(default)]
    pub done: bool,
}

impl Item {
    /// Creates a new open item from description tokens.
    ///
    /// Tokens are joined with single spaces and the result gains a trailing
    /// period if it does not already end with one.
    pub fn new(description: &[String], priority: u8) -> Self {
        let mut description = description.join(" ");
        if !description.ends_with('.') {
            description.push('.');
        }

        Self {
            description,
            priority,
            done: false,
        }
    }

    /// Marks the item as completed. Completion is one-way.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
