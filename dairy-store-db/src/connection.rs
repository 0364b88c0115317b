// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Database connection management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags, params_from_iter};
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{SCHEMA_SQL, TABLES};

/// Location of the database when no path is configured, relative to the
/// working directory.
pub const DEFAULT_DB_PATH: &str = "data/milk.db";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the on-disk record store.
///
/// Holds only the database location: every operation opens its own
/// connection and closes it before returning, so no state is shared
/// between calls.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Open or create a database at `path`.
    ///
    /// Missing parent directories are created and the schema is ensured.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| Error::CreateDir {
                path: dir.to_owned(),
                source: e,
            })?;
        }

        let store = Self {
            path: path.to_owned(),
        };
        store.ensure_schema()?;

        debug!("Opened record store at {}", path.display());
        Ok(store)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create any missing tables. Idempotent.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA_SQL)?;
        debug!("Ensured database schema");
        Ok(())
    }

    /// Check if the database has all expected tables.
    pub fn has_schema(&self) -> Result<bool> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (?1, ?2, ?3)",
        )?;
        let count: i64 = stmt.query_row(params_from_iter(TABLES), |row| row.get(0))?;
        Ok(count == TABLES.len() as i64)
    }

    /// Open a fresh connection for a single operation.
    ///
    /// Foreign keys are a per-connection setting in SQLite, so they are
    /// switched on here rather than once at creation time.
    pub(crate) fn connect(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let conn =
            Connection::open_with_flags(&self.path, flags).map_err(|e| Error::DatabaseOpen {
                path: self.path.clone(),
                source: e,
            })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/milk.db");

        let store = RecordStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
        assert!(store.has_schema().unwrap());
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("milk.db")).unwrap();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
        assert!(store.has_schema().unwrap());
    }

    #[test]
    fn test_connections_enforce_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("milk.db")).unwrap();
        let conn = store.connect().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_open_fails_when_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = RecordStore::open(blocker.join("milk.db")).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }
}
