// crates/superlists-store-sqlite/src/lib.rs
// ============================================================================
// Module: Superlists SQLite Store
// Description: Durable ListStore backed by SQLite.
// Purpose: Persist lists and items with a versioned schema.
// Dependencies: superlists-core, rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! This crate implements a durable [`superlists_core::ListStore`] using
//! `SQLite`. The schema carries a version record and opening a database
//! with an unsupported version fails closed. Database contents are treated
//! as untrusted input.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::SqliteListStore;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;
