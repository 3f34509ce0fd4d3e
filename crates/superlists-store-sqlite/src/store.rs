// crates/superlists-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite List Store
// Description: Durable ListStore backed by SQLite.
// Purpose: Persist lists and items with per-list uniqueness enforced by
//          the schema.
// Dependencies: superlists-core, rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! This module implements a durable [`ListStore`] using `SQLite`. The
//! per-list uniqueness invariant is enforced by a `UNIQUE(list_id, text)`
//! index so a racing duplicate submission fails closed even when the form
//! layer's pre-check passes. Opening a database whose schema version is not
//! the supported one fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;

use rusqlite::Connection;
use rusqlite::ErrorCode;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::params;
use serde::Deserialize;
use superlists_core::Item;
use superlists_core::ItemId;
use superlists_core::ListId;
use superlists_core::ListStore;
use superlists_core::StoreError;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// `SQLite` schema version for the store.
const SCHEMA_VERSION: i64 = 1;
/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// ============================================================================
// SECTION: Config
// ============================================================================

/// `SQLite` journal mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `journal_mode` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteStoreMode {
    /// WAL journal mode (recommended).
    #[default]
    Wal,
    /// Delete journal mode (legacy).
    Delete,
}

impl SqliteStoreMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Wal => "wal",
            Self::Delete => "delete",
        }
    }
}

/// `SQLite` sync mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `synchronous` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteSyncMode {
    /// Full synchronous mode (safest).
    #[default]
    Full,
    /// Normal synchronous mode (balanced).
    Normal,
}

impl SqliteSyncMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Normal => "normal",
        }
    }
}

/// Configuration for [`SqliteListStore`].
///
/// # Invariants
/// - `busy_timeout_ms` is interpreted as milliseconds.
#[derive(Debug, Clone)]
pub struct SqliteStoreConfig {
    /// Database file path.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    pub busy_timeout_ms: u64,
    /// Journal mode pragma.
    pub journal_mode: SqliteStoreMode,
    /// Synchronous mode pragma.
    pub sync_mode: SqliteSyncMode,
}

impl SqliteStoreConfig {
    /// Builds a config with default pragmas for the given path.
    #[must_use]
    pub fn for_path(path: PathBuf) -> Self {
        Self {
            path,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            journal_mode: SqliteStoreMode::default(),
            sync_mode: SqliteSyncMode::default(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while opening or initializing the store.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SqliteStoreError {
    /// `SQLite` reported an error.
    #[error("sqlite error: {0}")]
    Db(String),
    /// Store configuration is invalid.
    #[error("sqlite store invalid config: {0}")]
    Invalid(String),
    /// The database schema version is unsupported.
    #[error("sqlite store schema version mismatch: stored {stored}, supported {supported}")]
    VersionMismatch {
        /// Version recorded in the database.
        stored: i64,
        /// Version supported by this build.
        supported: i64,
    },
}

// ============================================================================
// SECTION: SQLite Store
// ============================================================================

/// Durable [`ListStore`] backed by a single `SQLite` connection.
#[derive(Debug)]
pub struct SqliteListStore {
    /// Guarded connection; `SQLite` serializes writers anyway.
    conn: Mutex<Connection>,
}

impl SqliteListStore {
    /// Opens (or creates) the database and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the path is invalid, the database
    /// cannot be opened, or the stored schema version is unsupported.
    pub fn new(config: SqliteStoreConfig) -> Result<Self, SqliteStoreError> {
        validate_path(&config)?;
        let mut connection = open_connection(&config)?;
        initialize_schema(&mut connection)?;
        Ok(Self {
            conn: Mutex::new(connection),
        })
    }

    /// Locks the connection, mapping mutex poisoning to a backend error.
    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
    }
}

impl ListStore for SqliteListStore {
    fn create_list(&self) -> Result<ListId, StoreError> {
        let conn = self.lock()?;
        conn.execute("INSERT INTO lists DEFAULT VALUES", params![])
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        ListId::from_raw(conn.last_insert_rowid())
            .ok_or_else(|| StoreError::Backend("list rowid out of range".to_string()))
    }

    fn add_item(&self, list: ListId, text: &str) -> Result<Item, StoreError> {
        let conn = self.lock()?;
        if !list_row_exists(&conn, list)? {
            return Err(StoreError::MissingList(list));
        }
        let result = conn.execute(
            "INSERT INTO items (list_id, text) VALUES (?1, ?2)",
            params![list.get(), text],
        );
        match result {
            Ok(_) => {
                let id = ItemId::from_raw(conn.last_insert_rowid())
                    .ok_or_else(|| StoreError::Backend("item rowid out of range".to_string()))?;
                Ok(Item {
                    id,
                    list,
                    text: text.to_string(),
                })
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateItem(list))
            }
            Err(err) => Err(StoreError::Backend(err.to_string())),
        }
    }

    fn list_exists(&self, list: ListId) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        list_row_exists(&conn, list)
    }

    fn items_for_list(&self, list: ListId) -> Result<Vec<Item>, StoreError> {
        let conn = self.lock()?;
        if !list_row_exists(&conn, list)? {
            return Err(StoreError::MissingList(list));
        }
        let mut stmt = conn
            .prepare_cached("SELECT id, text FROM items WHERE list_id = ?1 ORDER BY id ASC")
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        let rows = stmt
            .query_map(params![list.get()], |row| {
                let id: i64 = row.get(0)?;
                let text: String = row.get(1)?;
                Ok((id, text))
            })
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        let mut items = Vec::new();
        for row in rows {
            let (raw_id, text) = row.map_err(|err| StoreError::Backend(err.to_string()))?;
            let id = ItemId::from_raw(raw_id)
                .ok_or_else(|| StoreError::Backend("item rowid out of range".to_string()))?;
            items.push(Item {
                id,
                list,
                text,
            });
        }
        Ok(items)
    }

    fn item_exists(&self, list: ListId, text: &str) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT 1 FROM items WHERE list_id = ?1 AND text = ?2",
            params![list.get(), text],
            |_| Ok(()),
        )
        .optional()
        .map(|found| found.is_some())
        .map_err(|err| StoreError::Backend(err.to_string()))
    }

    fn list_count(&self) -> Result<u64, StoreError> {
        let conn = self.lock()?;
        count_rows(&conn, "SELECT COUNT(*) FROM lists")
    }

    fn item_count(&self) -> Result<u64, StoreError> {
        let conn = self.lock()?;
        count_rows(&conn, "SELECT COUNT(*) FROM items")
    }
}

// ============================================================================
// SECTION: Connection Helpers
// ============================================================================

/// Rejects store paths that cannot hold a database file.
fn validate_path(config: &SqliteStoreConfig) -> Result<(), SqliteStoreError> {
    if config.path.as_os_str().is_empty() {
        return Err(SqliteStoreError::Invalid("store path must not be empty".to_string()));
    }
    if config.path.exists() && config.path.is_dir() {
        return Err(SqliteStoreError::Invalid(
            "store path must be a file, not a directory".to_string(),
        ));
    }
    Ok(())
}

/// Opens an `SQLite` connection with the configured pragmas.
fn open_connection(config: &SqliteStoreConfig) -> Result<Connection, SqliteStoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    apply_pragmas(&connection, config)?;
    Ok(connection)
}

/// Applies the `SQLite` pragmas required for durability.
fn apply_pragmas(
    connection: &Connection,
    config: &SqliteStoreConfig,
) -> Result<(), SqliteStoreError> {
    connection
        .execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA journal_mode = {};", config.journal_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA synchronous = {};", config.sync_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(())
}

/// Initializes the `SQLite` schema or validates the stored version.
fn initialize_schema(connection: &mut Connection) -> Result<(), SqliteStoreError> {
    let tx = connection.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    tx.execute_batch("CREATE TABLE IF NOT EXISTS store_meta (version INTEGER NOT NULL);")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    let version: Option<i64> = tx
        .query_row("SELECT version FROM store_meta LIMIT 1", params![], |row| row.get(0))
        .optional()
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    match version {
        None => {
            tx.execute("INSERT INTO store_meta (version) VALUES (?1)", params![SCHEMA_VERSION])
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS lists (
                    id INTEGER PRIMARY KEY AUTOINCREMENT
                );
                CREATE TABLE IF NOT EXISTS items (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    list_id INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
                    text TEXT NOT NULL
                );
                CREATE UNIQUE INDEX IF NOT EXISTS idx_items_list_text
                    ON items (list_id, text);",
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        }
        Some(stored) if stored == SCHEMA_VERSION => {}
        Some(stored) => {
            return Err(SqliteStoreError::VersionMismatch {
                stored,
                supported: SCHEMA_VERSION,
            });
        }
    }
    tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))
}

/// Returns whether a list row exists without touching item tables.
fn list_row_exists(conn: &Connection, list: ListId) -> Result<bool, StoreError> {
    conn.query_row("SELECT 1 FROM lists WHERE id = ?1", params![list.get()], |_| Ok(()))
        .optional()
        .map(|found| found.is_some())
        .map_err(|err| StoreError::Backend(err.to_string()))
}

/// Runs a COUNT(*) query and widens the result.
fn count_rows(conn: &Connection, sql: &str) -> Result<u64, StoreError> {
    let count: i64 = conn
        .query_row(sql, params![], |row| row.get(0))
        .map_err(|err| StoreError::Backend(err.to_string()))?;
    u64::try_from(count).map_err(|_| StoreError::Backend("negative row count".to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
