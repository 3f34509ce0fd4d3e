// crates/superlists-web/src/lib.rs
// ============================================================================
// Module: Superlists Web
// Description: HTTP server, templates, and configuration.
// Purpose: Serve the Superlists pages over HTTP.
// Dependencies: superlists-core, superlists-store-sqlite, axum, maud, toml
// ============================================================================

//! ## Overview
//! This crate hosts the web layer of Superlists: TOML configuration, maud
//! page templates, and the axum server with the three views (home, new
//! list, list detail). All form input is untrusted and validated through
//! the core form layer before anything is persisted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod server;
pub mod templates;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::SuperlistsConfig;
pub use server::WebServer;
pub use server::WebServerError;
