// crates/superlists-web/src/config.rs
// ============================================================================
// Module: Superlists Configuration
// Description: Configuration loading and validation for the web server.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: superlists-store-sqlite, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits; parsing
//! and validation fail closed. When no path is given and the default file
//! does not exist, built-in defaults apply (memory store on loopback) so the
//! binary runs with zero setup. Config inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use superlists_store_sqlite::SqliteStoreMode;
use superlists_store_sqlite::SqliteSyncMode;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "superlists.toml";
/// Maximum accepted config file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Default server bind address.
const DEFAULT_BIND: &str = "127.0.0.1:8000";
/// Default maximum request body size in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;
/// Hard upper bound for the configurable body limit.
const MAX_BODY_BYTES_LIMIT: usize = 1024 * 1024;
/// Default store busy timeout in milliseconds.
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Hard upper bound for the configurable busy timeout.
const MAX_BUSY_TIMEOUT_MS: u64 = 60_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("config io error: {0}")]
    Io(String),
    /// The config file is not valid TOML.
    #[error("config parse error: {0}")]
    Parse(String),
    /// The config contents are invalid.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level Superlists configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuperlistsConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// List store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl SuperlistsConfig {
    /// Loads configuration from disk.
    ///
    /// An explicit `path` must exist. Without one, the default file is used
    /// when present and built-in defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_NAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.store.validate()
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Validates server settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when settings are invalid.
    fn validate(&self) -> Result<(), ConfigError> {
        let _: SocketAddr = self
            .bind
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid bind address: {}", self.bind)))?;
        if self.max_body_bytes == 0 || self.max_body_bytes > MAX_BODY_BYTES_LIMIT {
            return Err(ConfigError::Invalid("max_body_bytes out of range".to_string()));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Selectable list store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListStoreType {
    /// Volatile in-process store.
    #[default]
    Memory,
    /// Durable `SQLite` store.
    Sqlite,
}

/// List store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(rename = "type", default)]
    pub store_type: ListStoreType,
    /// Database file path (required for the sqlite backend).
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Busy timeout in milliseconds (sqlite backend).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Journal mode pragma (sqlite backend).
    #[serde(default)]
    pub journal_mode: SqliteStoreMode,
    /// Synchronous mode pragma (sqlite backend).
    #[serde(default)]
    pub sync_mode: SqliteSyncMode,
}

impl StoreConfig {
    /// Validates store settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when settings are invalid.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store_type == ListStoreType::Sqlite
            && self.path.as_ref().is_none_or(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid("sqlite store requires path".to_string()));
        }
        if self.busy_timeout_ms > MAX_BUSY_TIMEOUT_MS {
            return Err(ConfigError::Invalid("busy_timeout_ms out of range".to_string()));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: ListStoreType::default(),
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
            journal_mode: SqliteStoreMode::default(),
            sync_mode: SqliteSyncMode::default(),
        }
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Returns the default bind address.
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Returns the default request body limit.
const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

/// Returns the default busy timeout.
const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

// ============================================================================
// SECTION: Tests
// ============================================================================
