//! # Store
//!
//! Durable, whole-collection persistence for the quick list.
//!
//! The store owns a single YAML file holding the full ordered item
//! sequence. Nothing else in the crate touches that file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{constants::STORE_TEMP_SUFFIX, item::Item};

/// Errors raised at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be read.
    #[error("failed to read store {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file content is not a valid item list.
    #[error("store {} is not a valid item list: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    /// The store file could not be written or replaced.
    #[error("failed to write store {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The item list could not be serialized.
    #[error("failed to serialize item list: {0}")]
    Serialize(#[source] serde_yml::Error),
}

/// Handle to the list store file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store handle for the given file path.
    ///
    /// The path is always passed in explicitly so callers (and tests) decide
    /// where state lives.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full item collection.
    ///
    /// A missing or empty file means "no items yet" and yields an empty
    /// collection. Anything unreadable or unparseable is an error, and the
    /// caller may assume nothing was mutated.
    pub fn load(&self) -> Result<Vec<Item>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yml::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Saves the full item collection, replacing prior content.
    ///
    /// The document is written to a sibling temp file first and renamed over
    /// the target, so an interrupted save leaves the previous store intact.
    pub fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let content = serde_yml::to_string(&items).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|source| StoreError::Write {
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Returns the sibling path used for in-flight saves.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map_or_else(
            || std::ffi::OsString::from(STORE_TEMP_SUFFIX),
            std::ffi::OsStr::to_os_string,
        );
        name.push(STORE_TEMP_SUFFIX);
        self.path.with_file_name(name)
    }
}
