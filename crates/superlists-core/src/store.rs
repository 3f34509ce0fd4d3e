// crates/superlists-core/src/store.rs
// ============================================================================
// Module: List Store Interface
// Description: Persistence interface for lists and items.
// Purpose: Define the ListStore trait with a shared wrapper and an
//          in-memory reference backend.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! This module defines the persistence boundary of Superlists. Backends
//! implement [`ListStore`]; callers hold a cheap-clone [`SharedListStore`].
//! The per-list uniqueness invariant is enforced here as well as in the
//! form layer, so a racing duplicate submission fails closed at the store.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use thiserror::Error;

use crate::identifiers::ItemId;
use crate::identifiers::ListId;

// ============================================================================
// SECTION: Item Record
// ============================================================================

/// A persisted to-do item.
///
/// # Invariants
/// - `text` is non-empty and unique within the owning list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Owning list identifier.
    pub list: ListId,
    /// Item text as entered (trimmed at the form boundary).
    pub text: String,
}

// ============================================================================
// SECTION: Store Errors
// ============================================================================

/// List store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend I/O or internal error.
    #[error("list store backend error: {0}")]
    Backend(String),
    /// The referenced list does not exist.
    #[error("unknown list: {0}")]
    MissingList(ListId),
    /// The (list, text) pair already exists.
    #[error("duplicate item text in list {0}")]
    DuplicateItem(ListId),
}

// ============================================================================
// SECTION: Store Trait
// ============================================================================

/// Persistence interface for lists and items.
pub trait ListStore {
    /// Creates a new empty list and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn create_list(&self) -> Result<ListId, StoreError>;

    /// Appends an item to a list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingList`] for unknown lists,
    /// [`StoreError::DuplicateItem`] when the text already exists in the
    /// list, and other [`StoreError`] variants on backend failure.
    fn add_item(&self, list: ListId, text: &str) -> Result<Item, StoreError>;

    /// Returns whether a list exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn list_exists(&self, list: ListId) -> Result<bool, StoreError>;

    /// Returns the items of a list in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingList`] for unknown lists.
    fn items_for_list(&self, list: ListId) -> Result<Vec<Item>, StoreError>;

    /// Returns whether an item with this exact text exists in the list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn item_exists(&self, list: ListId, text: &str) -> Result<bool, StoreError>;

    /// Returns the total number of lists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn list_count(&self) -> Result<u64, StoreError>;

    /// Returns the total number of items across all lists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    fn item_count(&self) -> Result<u64, StoreError>;
}

// ============================================================================
// SECTION: Shared Store
// ============================================================================

/// Cheap-clone shared handle to a [`ListStore`] backend.
#[derive(Clone)]
pub struct SharedListStore {
    /// Shared backend instance.
    inner: Arc<dyn ListStore + Send + Sync>,
}

impl SharedListStore {
    /// Wraps a backend in a shared handle.
    pub fn from_store<S>(store: S) -> Self
    where
        S: ListStore + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(store),
        }
    }
}

impl ListStore for SharedListStore {
    fn create_list(&self) -> Result<ListId, StoreError> {
        self.inner.create_list()
    }

    fn add_item(&self, list: ListId, text: &str) -> Result<Item, StoreError> {
        self.inner.add_item(list, text)
    }

    fn list_exists(&self, list: ListId) -> Result<bool, StoreError> {
        self.inner.list_exists(list)
    }

    fn items_for_list(&self, list: ListId) -> Result<Vec<Item>, StoreError> {
        self.inner.items_for_list(list)
    }

    fn item_exists(&self, list: ListId, text: &str) -> Result<bool, StoreError> {
        self.inner.item_exists(list, text)
    }

    fn list_count(&self) -> Result<u64, StoreError> {
        self.inner.list_count()
    }

    fn item_count(&self) -> Result<u64, StoreError> {
        self.inner.item_count()
    }
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// Mutable state behind the in-memory store mutex.
#[derive(Debug, Default)]
struct InMemoryState {
    /// Next list identifier to allocate (0 means "start at 1").
    next_list_id: i64,
    /// Next item identifier to allocate (0 means "start at 1").
    next_item_id: i64,
    /// Identifiers of created lists.
    lists: Vec<ListId>,
    /// All items across all lists, in insertion order.
    items: Vec<Item>,
}

/// In-memory [`ListStore`] backend for tests and the `memory` store type.
#[derive(Debug, Default)]
pub struct InMemoryListStore {
    /// Guarded store state.
    state: Mutex<InMemoryState>,
}

impl InMemoryListStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the state, mapping mutex poisoning to a backend error.
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
    }
}

impl ListStore for InMemoryListStore {
    fn create_list(&self) -> Result<ListId, StoreError> {
        let mut state = self.lock()?;
        state.next_list_id += 1;
        let id = ListId::from_raw(state.next_list_id)
            .ok_or_else(|| StoreError::Backend("list id allocation overflow".to_string()))?;
        state.lists.push(id);
        Ok(id)
    }

    fn add_item(&self, list: ListId, text: &str) -> Result<Item, StoreError> {
        let mut state = self.lock()?;
        if !state.lists.contains(&list) {
            return Err(StoreError::MissingList(list));
        }
        if state.items.iter().any(|item| item.list == list && item.text == text) {
            return Err(StoreError::DuplicateItem(list));
        }
        state.next_item_id += 1;
        let id = ItemId::from_raw(state.next_item_id)
            .ok_or_else(|| StoreError::Backend("item id allocation overflow".to_string()))?;
        let item = Item {
            id,
            list,
            text: text.to_string(),
        };
        state.items.push(item.clone());
        Ok(item)
    }

    fn list_exists(&self, list: ListId) -> Result<bool, StoreError> {
        Ok(self.lock()?.lists.contains(&list))
    }

    fn items_for_list(&self, list: ListId) -> Result<Vec<Item>, StoreError> {
        let state = self.lock()?;
        if !state.lists.contains(&list) {
            return Err(StoreError::MissingList(list));
        }
        Ok(state.items.iter().filter(|item| item.list == list).cloned().collect())
    }

    fn item_exists(&self, list: ListId, text: &str) -> Result<bool, StoreError> {
        let state = self.lock()?;
        Ok(state.items.iter().any(|item| item.list == list && item.text == text))
    }

    fn list_count(&self) -> Result<u64, StoreError> {
        let len = self.lock()?.lists.len();
        u64::try_from(len).map_err(|_| StoreError::Backend("list count out of range".to_string()))
    }

    fn item_count(&self) -> Result<u64, StoreError> {
        let len = self.lock()?.items.len();
        u64::try_from(len).map_err(|_| StoreError::Backend("item count out of range".to_string()))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
