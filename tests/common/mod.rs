//! # Test Harness
//!
//! Utilities for integration testing quicklist without touching the user's
//! real configuration. Uses the library's thread-local home override instead
//! of environment variables, so parallel test threads stay isolated and the
//! shell environment is never modified.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)] // each test binary uses its own subset of helpers

use std::{fs, path::PathBuf};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use quicklist::{
    commands::{self, InitArgs},
    set_home_override, Item, Store,
};

/// Test environment that redirects the "home" directory (and with it the
/// global config and the default store location) into a temp dir.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment and activates the home override for
    /// the current thread.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    /// Returns the path where the global config is stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("quicklist")
            .join("config")
    }

    /// Returns the default store location inside the temp home.
    pub fn store_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".local")
            .join("share")
            .join("quicklist")
            .join("list.yml")
    }

    /// Writes raw content into the store file.
    pub fn write_store(&self, content: &str) {
        let path = self.store_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create store directory");
        }
        fs::write(path, content).expect("Failed to write store");
    }

    /// Reads the raw store file content.
    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store_path()).expect("Failed to read store")
    }

    /// Loads the stored items through the library's own store.
    pub fn load_items(&self) -> Vec<Item> {
        Store::new(self.store_path())
            .load()
            .expect("store should load")
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates a test environment with `qkl init` already run against the
/// default store location.
pub fn setup_initialized() -> TestEnv {
    let env = TestEnv::new();
    commands::init(InitArgs {
        store_path: None,
        force: false,
    })
    .expect("init should succeed");
    env
}

/// Builds owned description tokens from string literals.
pub fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}
