//! # quicklist
//!
//! A minimal personal quick-list (to-do) manager for the command line.
//!
//! The whole list lives in a single YAML file that is loaded, mutated, and
//! rewritten as a unit on every operation, keeping the on-disk store the
//! sole source of truth between invocations.
//!
//! ## Features
//!
//! - **YAML Storage**: The list is one human-diffable YAML document
//! - **Positional Addressing**: Items are addressed by their 1-based position
//! - **Priorities**: Every item carries a priority from 1 (high) to 3 (low)
//! - **Atomic Saves**: The store file is replaced via temp-file-then-rename
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod engine;
pub mod item;
pub mod store;
pub mod ui;

pub use config::{set_home_override, GlobalConfig};
pub use engine::{EngineError, ListEngine};
pub use item::Item;
pub use store::{Store, StoreError};
