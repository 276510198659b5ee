//! Durable client-side preference storage.
//!
//! Both state stores persist their current selection through the
//! [`Preferences`] trait: a synchronous, best-effort key-value contract.
//! Reads that fail behave as "absent" and writes that fail are reported to
//! the caller, who logs and moves on. A runtime without durable storage
//! plugs in [`DisabledPreferences`] and the stores keep working with
//! session-only state.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::warn;

/// Error from a preference write.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The underlying SQLite operation failed.
    #[error("preference database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Synchronous key-value storage for client preferences.
///
/// `get` is infallible by contract: an unreadable entry is indistinguishable
/// from an absent one. `set` surfaces its failure so callers can log it, but
/// callers never treat a failed write as fatal.
pub trait Preferences: Send + Sync {
    /// Read the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// SQLite-backed preferences, one `preferences(key, value)` table.
#[derive(Clone)]
pub struct SqlitePreferences {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePreferences {
    /// Open (or create) the preference database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preference database at {}", path.display()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create preferences table")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open the preference database in the per-user data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "Tabu")
            .context("Could not determine a per-user data directory")?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        Ok(data_dir.join("preferences.db"))
    }
}

impl Preferences for SqlitePreferences {
    fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().unwrap();

        let result = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(e) => {
                // Unreadable entries count as absent.
                warn!("Failed to read preference '{}': {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;

        Ok(())
    }
}

/// In-memory preferences, session-only. Used by tests and by callers that
/// want the stores without touching disk.
#[derive(Default)]
pub struct MemoryPreferences {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// No-op preferences for runtimes without durable storage. Every read is
/// absent and every write succeeds without storing anything, so selections
/// reset to their defaults each session.
pub struct DisabledPreferences;

impl Preferences for DisabledPreferences {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}
