// crates/superlists-core/src/lib.rs
// ============================================================================
// Module: Superlists Core
// Description: Domain model, store interface, and form validation.
// Purpose: Provide the list/item model shared by all Superlists crates.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! This crate defines the Superlists domain: list and item identifiers, the
//! [`ListStore`] persistence interface with an in-memory reference backend,
//! and the form layer that validates submitted item text. Form input is
//! untrusted; validation happens at the binding boundary and stores enforce
//! the per-list uniqueness invariant independently.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod forms;
pub mod identifiers;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use forms::DUPLICATE_ITEM_ERROR;
pub use forms::EMPTY_ITEM_ERROR;
pub use forms::ExistingListItemForm;
pub use forms::ItemForm;
pub use identifiers::ItemId;
pub use identifiers::ListId;
pub use store::InMemoryListStore;
pub use store::Item;
pub use store::ListStore;
pub use store::SharedListStore;
pub use store::StoreError;
