//! # List Engine
//!
//! List semantics on top of the [`Store`]: ordering, positional identity,
//! priority, and completion state.
//!
//! Every operation is one explicit load → mutate → save cycle. Nothing is
//! cached between calls, so the store file is the single source of truth.
//! There is no cross-process locking: two concurrent invocations racing on
//! the same store can lose an update (last save wins).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use crate::{
    item::Item,
    store::{Store, StoreError},
};

/// Errors surfaced by list operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The stored list could not be loaded.
    #[error("cannot read the list")]
    Read(#[source] StoreError),

    /// The mutated list could not be persisted.
    #[error("cannot save the list")]
    Write(#[source] StoreError),

    /// The given 1-based position does not address any stored item.
    #[error("no item at position {position} (the list has {len} item(s))")]
    InvalidPosition { position: usize, len: usize },
}

/// The list-management core.
///
/// Positions are 1-based and purely positional: removing an item shifts
/// every later item down by one.
#[derive(Debug)]
pub struct ListEngine {
    store: Store,
}

impl ListEngine {
    /// Creates an engine over the given store.
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Appends a new open item built from the description tokens.
    ///
    /// If the list cannot be loaded, nothing is written and the new item is
    /// not persisted.
    pub fn add(&self, description: &[String], priority: u8) -> Result<Item, EngineError> {
        let item = Item::new(description, priority);

        let mut items = self.store.load().map_err(EngineError::Read)?;
        items.push(item.clone());
        self.store.save(&items).map_err(EngineError::Write)?;

        Ok(item)
    }

    /// Returns the stored items in order.
    ///
    /// Load failures propagate; an empty result always means an empty list.
    pub fn list(&self) -> Result<Vec<Item>, EngineError> {
        self.store.load().map_err(EngineError::Read)
    }

    /// Marks the item at the given position as done and returns it.
    ///
    /// Idempotent: marking an already-done item succeeds and leaves it done.
    pub fn mark_done(&self, position: usize) -> Result<Item, EngineError> {
        let mut items = self.store.load().map_err(EngineError::Read)?;
        let index = Self::index_of(position, items.len())?;

        items[index].mark_done();
        let item = items[index].clone();
        self.store.save(&items).map_err(EngineError::Write)?;

        Ok(item)
    }

    /// Removes the item at the given position and returns its prior state.
    ///
    /// Items after the removed one shift down by one position.
    pub fn remove(&self, position: usize) -> Result<Item, EngineError> {
        let mut items = self.store.load().map_err(EngineError::Read)?;
        let index = Self::index_of(position, items.len())?;

        let item = items.remove(index);
        self.store.save(&items).map_err(EngineError::Write)?;

        Ok(item)
    }

    /// Replaces the whole collection with an empty one.
    pub fn remove_all(&self) -> Result<(), EngineError> {
        self.store.save(&[]).map_err(EngineError::Write)
    }

    /// Maps a 1-based position onto an index, rejecting anything outside
    /// `[1, len]`.
    const fn index_of(position: usize, len: usize) -> Result<usize, EngineError> {
        if position == 0 || position > len {
            return Err(EngineError::InvalidPosition { position, len });
        }
        Ok(position - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn temp_engine() -> (tempfile::TempDir, ListEngine) {
        let dir = tempfile::tempdir().unwrap();
        let engine = ListEngine::new(Store::new(dir.path().join("list.yml")));
        (dir, engine)
    }

    #[test]
    fn test_add_then_mark_then_remove_scenario() {
        let (_dir, engine) = temp_engine();

        let first = engine.add(&tokens(&["Clean", "the", "house"]), 1).unwrap();
        assert_eq!(first.description, "Clean the house.");
        assert_eq!(first.priority, 1);
        assert!(!first.done);

        let second = engine.add(&tokens(&["Wash the car"]), 2).unwrap();
        assert_eq!(second.description, "Wash the car.");

        let items = engine.list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], second);

        let marked = engine.mark_done(1).unwrap();
        assert!(marked.done);
        assert_eq!(marked.description, "Clean the house.");

        let removed = engine.remove(1).unwrap();
        assert_eq!(removed.description, "Clean the house.");

        let items = engine.list().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Wash the car.");
        assert_eq!(items[0].priority, 2);
        assert!(!items[0].done);
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, engine) = temp_engine();
        assert_eq!(engine.list().unwrap(), Vec::new());
    }

    #[test]
    fn test_remove_shifts_later_positions() {
        let (_dir, engine) = temp_engine();
        for word in ["one", "two", "three", "four"] {
            engine.add(&tokens(&[word]), 2).unwrap();
        }

        engine.remove(2).unwrap();

        let items = engine.list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].description, "one.");
        assert_eq!(items[1].description, "three.");
        assert_eq!(items[2].description, "four.");
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let (_dir, engine) = temp_engine();
        engine.add(&tokens(&["Water plants"]), 2).unwrap();

        assert!(engine.mark_done(1).unwrap().done);
        assert!(engine.mark_done(1).unwrap().done);
    }

    #[test]
    fn test_out_of_bounds_positions_leave_store_unchanged() {
        let (_dir, engine) = temp_engine();
        engine.add(&tokens(&["Only item"]), 2).unwrap();
        let before = engine.list().unwrap();

        for position in [0, 2, 99] {
            assert!(matches!(
                engine.mark_done(position),
                Err(EngineError::InvalidPosition { .. })
            ));
            assert!(matches!(
                engine.remove(position),
                Err(EngineError::InvalidPosition { .. })
            ));
        }

        assert_eq!(engine.list().unwrap(), before);
    }

    #[test]
    fn test_remove_all_empties_the_list() {
        let (_dir, engine) = temp_engine();
        for word in ["one", "two", "three"] {
            engine.add(&tokens(&[word]), 2).unwrap();
        }

        engine.remove_all().unwrap();
        assert_eq!(engine.list().unwrap(), Vec::new());
    }

    #[test]
    fn test_remove_all_on_empty_list() {
        let (_dir, engine) = temp_engine();
        engine.remove_all().unwrap();
        assert_eq!(engine.list().unwrap(), Vec::new());
    }

    #[test]
    fn test_add_does_not_write_when_load_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.yml");
        std::fs::write(&path, "{ not an item list").unwrap();
        let engine = ListEngine::new(Store::new(path.clone()));

        assert!(matches!(
            engine.add(&tokens(&["Doomed"]), 2),
            Err(EngineError::Read(_))
        ));

        // The corrupt file must be untouched.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not an item list");
    }
}
