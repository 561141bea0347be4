//! SQLite-backed secret store.
//!
//! One table, `mfa_secret`, with a unique index on `name`. The schema
//! is created on open and creation is idempotent, so every startup can
//! run it unconditionally.

use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use super::{SecretEntry, SecretStore, UpsertOutcome};
use crate::errors::{MfaError, Result};

/// SQLite's `CURRENT_TIMESTAMP` text format.
const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Secret store backed by a SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema
    /// exists.
    ///
    /// Parent directories are created as needed. The database file is
    /// restricted to the owner on Unix — it holds shared secrets in
    /// plaintext.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(path, perms);
        }

        Self::from_connection(conn)
    }

    /// Open a throwaway in-memory store. Handy as a test double.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS mfa_secret (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                name       TEXT NOT NULL UNIQUE,
                secret     TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );",
        )?;

        Ok(Self { conn })
    }
}

impl SecretStore for SqliteStore {
    fn get(&self, name: &str) -> Result<String> {
        self.conn
            .query_row(
                "SELECT secret FROM mfa_secret WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => MfaError::SecretNotFound(name.to_string()),
                other => MfaError::Store(other),
            })
    }

    fn upsert(&mut self, name: &str, secret: &str) -> Result<UpsertOutcome> {
        // The existence check and the conditional write commit together,
        // so two racing upserts for the same name cannot both insert.
        let tx = self.conn.transaction()?;

        let existed: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM mfa_secret WHERE name = ?1)",
            params![name],
            |row| row.get(0),
        )?;

        // ON CONFLICT leaves `id` and `created_at` untouched.
        tx.execute(
            "INSERT INTO mfa_secret (name, secret) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET secret = excluded.secret",
            params![name, secret],
        )?;

        tx.commit()?;

        Ok(if existed {
            UpsertOutcome::Replaced
        } else {
            UpsertOutcome::Created
        })
    }

    fn list(&self) -> Result<Vec<SecretEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, created_at FROM mfa_secret ORDER BY name")?;

        let rows = stmt.query_map([], |row| {
            let name: String = row.get(0)?;
            let ts: String = row.get(1)?;
            let created_at = NaiveDateTime::parse_from_str(&ts, SQLITE_DATETIME_FORMAT)
                .map_or_else(|_| Utc::now(), |dt| dt.and_utc());
            Ok(SecretEntry { name, created_at })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }

        Ok(entries)
    }
}
