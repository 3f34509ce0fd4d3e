// crates/superlists-web/src/templates.rs
// ============================================================================
// Module: Page Templates
// Description: maud markup for the Superlists pages.
// Purpose: Render lists, the item form, and validation errors.
// Dependencies: superlists-core, maud
// ============================================================================

//! ## Overview
//! Compile-time maud templates for the three pages. Item text and submitted
//! form values are interpolated through maud and therefore HTML-escaped by
//! construction. Field errors render in a `has-error` block which a small
//! inline script hides as soon as the user edits the input, so errors clear
//! once the field becomes valid client-side.

// ============================================================================
// SECTION: Imports
// ============================================================================

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;
use superlists_core::ExistingListItemForm;
use superlists_core::Item;
use superlists_core::ItemForm;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder shown in the item input.
const ITEM_PLACEHOLDER: &str = "Enter a to-do item";

/// Shared page stylesheet.
const BASE_STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;\
                          text-align:center}table{margin:1rem auto}.has-error{color:#b30000}";

/// Hides the error block as soon as the input is edited again.
const ERROR_CLEAR_SCRIPT: &str = "document.getElementById('id_text').addEventListener('input', \
                                  function () { var block = \
                                  document.querySelector('.has-error'); if (block) { \
                                  block.style.display = 'none'; } });";

// ============================================================================
// SECTION: Pages
// ============================================================================

/// Renders the home page with a (possibly bound) new-list form.
#[must_use]
pub fn home_page(form: &ItemForm) -> Markup {
    base(
        "To-Do lists",
        html! {
            h1 { "Start a new To-Do list" }
            (item_form("/lists/new", form.text(), form.errors()))
        },
    )
}

/// Renders a list page with its items and a (possibly bound) item form.
#[must_use]
pub fn list_page(items: &[Item], form: &ExistingListItemForm) -> Markup {
    let action = format!("/lists/{}/", form.list());
    base(
        "To-Do lists",
        html! {
            h1 { "Your To-Do list" }
            (item_form(&action, form.text(), form.errors()))
            table id="id_list_table" {
                tbody {
                    @for (index, item) in items.iter().enumerate() {
                        tr { td { (format!("{}: {}", index + 1, item.text)) } }
                    }
                }
            }
        },
    )
}

/// Renders the 404 page.
#[must_use]
pub fn not_found_page() -> Markup {
    base(
        "To-Do lists",
        html! {
            h1 { "Page not found" }
            p { "That list does not exist." }
        },
    )
}

/// Renders the generic 500 page without leaking backend detail.
#[must_use]
pub fn error_page() -> Markup {
    base(
        "To-Do lists",
        html! {
            h1 { "Something went wrong" }
            p { "Please try again later." }
        },
    )
}

// ============================================================================
// SECTION: Fragments
// ============================================================================

/// Shared page layout.
fn base(page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (page_title) }
                style { (PreEscaped(BASE_STYLE)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the item input form with any validation errors.
fn item_form(action: &str, text: &str, errors: &[&'static str]) -> Markup {
    html! {
        form method="POST" action=(action) {
            input id="id_text" name="text" placeholder=(ITEM_PLACEHOLDER) value=(text) required;
        }
        @if !errors.is_empty() {
            div class="has-error" {
                @for error in errors {
                    div class="help-block" { (error) }
                }
            }
            script { (PreEscaped(ERROR_CLEAR_SCRIPT)) }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
