// crates/superlists-core/src/identifiers.rs
// ============================================================================
// Module: Superlists Identifiers
// Description: Canonical opaque identifiers for lists and items.
// Purpose: Provide strongly typed identifiers with the SQLite rowid domain.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This module defines the identifiers used throughout Superlists. Both map
//! onto SQLite rowids and therefore enforce a positive, 1-based invariant at
//! construction boundaries. URL path segments are parsed into these types,
//! so zero or negative values are rejected before any store access.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroI64;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// List identifier.
///
/// # Invariants
/// - Always >= 1 (positive, 1-based rowid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(NonZeroI64);

impl ListId {
    /// Creates a list identifier from a raw value (returns `None` unless positive).
    #[must_use]
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw < 1 {
            return None;
        }
        NonZeroI64::new(raw).map(Self)
    }

    /// Returns the raw identifier value (always >= 1).
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0.get()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}

/// Item identifier.
///
/// # Invariants
/// - Always >= 1 (positive, 1-based rowid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(NonZeroI64);

impl ItemId {
    /// Creates an item identifier from a raw value (returns `None` unless positive).
    #[must_use]
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw < 1 {
            return None;
        }
        NonZeroI64::new(raw).map(Self)
    }

    /// Returns the raw identifier value (always >= 1).
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0.get()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
