// crates/superlists-core/src/forms.rs
// ============================================================================
// Module: Item Forms
// Description: Bound-form validation for submitted item text.
// Purpose: Validate untrusted form input before anything is persisted.
// Dependencies: superlists-core store
// ============================================================================

//! ## Overview
//! Forms bind submitted text at the request boundary and carry their
//! validation errors so a failed POST can re-render the page with the
//! submitted value intact. [`ItemForm`] enforces the non-empty rule;
//! [`ExistingListItemForm`] additionally checks per-list uniqueness against
//! the store. Nothing is persisted through an invalid form.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::identifiers::ListId;
use crate::store::ListStore;
use crate::store::StoreError;

// ============================================================================
// SECTION: Error Messages
// ============================================================================

/// User-visible error for a blank item submission.
pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";
/// User-visible error for a duplicate item submission.
pub const DUPLICATE_ITEM_ERROR: &str = "You've already got this in your list";

// ============================================================================
// SECTION: Item Form
// ============================================================================

/// Form for a submitted to-do item.
///
/// # Invariants
/// - `text` holds the trimmed submitted value.
/// - `errors` is non-empty exactly when the submission is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    /// Trimmed submitted text.
    text: String,
    /// Validation errors in display order.
    errors: Vec<&'static str>,
}

impl ItemForm {
    /// Creates an unbound form for rendering an empty input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Binds submitted text, trimming it and validating the non-empty rule.
    #[must_use]
    pub fn bind(text: &str) -> Self {
        let trimmed = text.trim();
        let errors = if trimmed.is_empty() { vec![EMPTY_ITEM_ERROR] } else { Vec::new() };
        Self {
            text: trimmed.to_string(),
            errors,
        }
    }

    /// Returns whether the bound value may be saved.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty() && self.errors.is_empty()
    }

    /// Returns the trimmed submitted text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the validation errors in display order.
    #[must_use]
    pub fn errors(&self) -> &[&'static str] {
        &self.errors
    }
}

// ============================================================================
// SECTION: Existing-List Item Form
// ============================================================================

/// Form for a submission against a pre-existing list.
///
/// Carries the owning list so uniqueness is checked in the right scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingListItemForm {
    /// Inner text form.
    form: ItemForm,
    /// List the submission targets.
    list: ListId,
}

impl ExistingListItemForm {
    /// Creates an unbound form for rendering an empty input.
    #[must_use]
    pub fn empty(list: ListId) -> Self {
        Self {
            form: ItemForm::empty(),
            list,
        }
    }

    /// Binds submitted text and validates it against the target list.
    ///
    /// The duplicate check only runs when the text passes the non-empty
    /// rule, so a blank submission surfaces a single error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lookup fails.
    pub fn bind(list: ListId, text: &str, store: &dyn ListStore) -> Result<Self, StoreError> {
        let mut form = ItemForm::bind(text);
        if form.is_valid() && store.item_exists(list, form.text())? {
            form.errors.push(DUPLICATE_ITEM_ERROR);
        }
        Ok(Self {
            form,
            list,
        })
    }

    /// Returns the list the submission targets.
    #[must_use]
    pub const fn list(&self) -> ListId {
        self.list
    }

    /// Returns whether the bound value may be saved.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Returns the trimmed submitted text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.form.text()
    }

    /// Returns the validation errors in display order.
    #[must_use]
    pub fn errors(&self) -> &[&'static str] {
        self.form.errors()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
