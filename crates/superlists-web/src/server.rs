// crates/superlists-web/src/server.rs
// ============================================================================
// Module: Web Server
// Description: Axum server and request handlers for Superlists.
// Purpose: Serve the home, new-list, and list-detail views over HTTP.
// Dependencies: superlists-core, superlists-store-sqlite, axum, tower-http
// ============================================================================

//! ## Overview
//! The web server wires the configured store into an axum [`Router`] with
//! the three views. POST handlers follow the redirect-or-rerender flow: a
//! valid submission persists the item and redirects to the owning list's
//! detail URL; an invalid one re-renders the page with the bound form and
//! its errors without persisting anything. Form input is untrusted and only
//! crosses into the store through the core form layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::Form;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;
use superlists_core::ExistingListItemForm;
use superlists_core::InMemoryListStore;
use superlists_core::ItemForm;
use superlists_core::ListId;
use superlists_core::ListStore;
use superlists_core::SharedListStore;
use superlists_core::StoreError;
use superlists_store_sqlite::SqliteListStore;
use superlists_store_sqlite::SqliteStoreConfig;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::config::ListStoreType;
use crate::config::SuperlistsConfig;
use crate::templates;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Web server errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum WebServerError {
    /// Configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
    /// Server initialization failed.
    #[error("initialization error: {0}")]
    Init(String),
    /// The HTTP transport failed.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Web Server
// ============================================================================

/// Superlists web server instance.
pub struct WebServer {
    /// Server configuration.
    config: SuperlistsConfig,
    /// Shared list store.
    store: SharedListStore,
}

impl WebServer {
    /// Builds a server from configuration, constructing the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`WebServerError`] when the configuration is invalid or the
    /// store cannot be initialized.
    pub fn from_config(config: SuperlistsConfig) -> Result<Self, WebServerError> {
        config.validate().map_err(|err| WebServerError::Config(err.to_string()))?;
        let store = build_list_store(&config)?;
        Ok(Self::with_store(config, store))
    }

    /// Builds a server around an existing store.
    ///
    /// The caller is responsible for the configuration being valid; this is
    /// the seam tests use to share a store with the server.
    #[must_use]
    pub fn with_store(config: SuperlistsConfig, store: SharedListStore) -> Self {
        Self {
            config,
            store,
        }
    }

    /// Builds the axum router for this server.
    #[must_use]
    pub fn router(&self) -> Router {
        let state = AppState {
            store: self.store.clone(),
        };
        Router::new()
            .route("/", get(home))
            .route("/lists/new", post(new_list))
            .route("/lists/{id}/", get(view_list).post(add_item))
            .layer(DefaultBodyLimit::max(self.config.server.max_body_bytes))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Serves requests on the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`WebServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), WebServerError> {
        let addr: SocketAddr = self
            .config
            .server
            .bind
            .parse()
            .map_err(|_| WebServerError::Config("invalid bind address".to_string()))?;
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| WebServerError::Transport("http bind failed".to_string()))?;
        tracing::info!(bind = %addr, "superlists server listening");
        axum::serve(listener, app)
            .await
            .map_err(|_| WebServerError::Transport("http server failed".to_string()))
    }
}

/// Builds the list store selected by configuration.
fn build_list_store(config: &SuperlistsConfig) -> Result<SharedListStore, WebServerError> {
    let store = match config.store.store_type {
        ListStoreType::Memory => SharedListStore::from_store(InMemoryListStore::new()),
        ListStoreType::Sqlite => {
            let path = config
                .store
                .path
                .clone()
                .ok_or_else(|| WebServerError::Config("sqlite store requires path".to_string()))?;
            let sqlite_config = SqliteStoreConfig {
                path,
                busy_timeout_ms: config.store.busy_timeout_ms,
                journal_mode: config.store.journal_mode,
                sync_mode: config.store.sync_mode,
            };
            let store = SqliteListStore::new(sqlite_config)
                .map_err(|err| WebServerError::Init(err.to_string()))?;
            tracing::info!("sqlite list store initialized");
            SharedListStore::from_store(store)
        }
    };
    Ok(store)
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Shared handler state.
#[derive(Clone)]
struct AppState {
    /// Shared list store.
    store: SharedListStore,
}

/// Submitted item form payload. A missing field binds as empty text.
#[derive(Debug, Deserialize)]
struct ItemPayload {
    /// Raw submitted text.
    #[serde(default)]
    text: String,
}

/// GET `/` renders the home page with an empty form.
async fn home() -> Response {
    templates::home_page(&ItemForm::empty()).into_response()
}

/// POST `/lists/new` creates a list and its first item when valid.
async fn new_list(State(state): State<AppState>, Form(payload): Form<ItemPayload>) -> Response {
    let form = ItemForm::bind(&payload.text);
    if !form.is_valid() {
        tracing::debug!("new-list submission rejected");
        return (StatusCode::OK, templates::home_page(&form)).into_response();
    }
    let created = state
        .store
        .create_list()
        .and_then(|list| state.store.add_item(list, form.text()).map(|_| list));
    match created {
        Ok(list) => Redirect::to(&format!("/lists/{list}/")).into_response(),
        Err(err) => internal_error(&err),
    }
}

/// GET `/lists/{id}/` renders the list with its items and an empty form.
async fn view_list(State(state): State<AppState>, Path(raw_id): Path<i64>) -> Response {
    let list = match known_list(&state, raw_id) {
        Ok(Some(list)) => list,
        Ok(None) => return not_found(),
        Err(err) => return internal_error(&err),
    };
    render_list_page(&state, list, &ExistingListItemForm::empty(list))
}

/// POST `/lists/{id}/` appends an item to the list when valid.
async fn add_item(
    State(state): State<AppState>,
    Path(raw_id): Path<i64>,
    Form(payload): Form<ItemPayload>,
) -> Response {
    let list = match known_list(&state, raw_id) {
        Ok(Some(list)) => list,
        Ok(None) => return not_found(),
        Err(err) => return internal_error(&err),
    };
    let form = match ExistingListItemForm::bind(list, &payload.text, &state.store) {
        Ok(form) => form,
        Err(err) => return internal_error(&err),
    };
    if !form.is_valid() {
        tracing::debug!(list = %list, "item submission rejected");
        return render_list_page(&state, list, &form);
    }
    match state.store.add_item(list, form.text()) {
        Ok(_) => Redirect::to(&format!("/lists/{list}/")).into_response(),
        // A racing submission can slip past the form pre-check; the unique
        // index catches it, and re-binding surfaces the duplicate error.
        Err(StoreError::DuplicateItem(_)) => {
            match ExistingListItemForm::bind(list, &payload.text, &state.store) {
                Ok(raced) => render_list_page(&state, list, &raced),
                Err(err) => internal_error(&err),
            }
        }
        Err(err) => internal_error(&err),
    }
}

// ============================================================================
// SECTION: Handler Helpers
// ============================================================================

/// Resolves a raw path id to an existing list, if any.
fn known_list(state: &AppState, raw_id: i64) -> Result<Option<ListId>, StoreError> {
    let Some(list) = ListId::from_raw(raw_id) else {
        return Ok(None);
    };
    Ok(state.store.list_exists(list)?.then_some(list))
}

/// Renders a list page for the given bound form.
fn render_list_page(state: &AppState, list: ListId, form: &ExistingListItemForm) -> Response {
    match state.store.items_for_list(list) {
        Ok(items) => (StatusCode::OK, templates::list_page(&items, form)).into_response(),
        Err(err) => internal_error(&err),
    }
}

/// Returns the 404 response.
fn not_found() -> Response {
    (StatusCode::NOT_FOUND, templates::not_found_page()).into_response()
}

/// Logs a store failure and returns the generic 500 response.
fn internal_error(err: &StoreError) -> Response {
    tracing::error!(error = %err, "store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, templates::error_page()).into_response()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
