//! Durable name → secret storage.
//!
//! The store is an explicit object handed to callers, not a hidden
//! global: commands receive a [`SecretStore`] and the engine never
//! touches persistence at all. The default backend is SQLite
//! (`sqlite`); anything implementing the trait works, which keeps
//! tests free to substitute an in-memory database.

pub mod sqlite;

pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};

use crate::errors::Result;

/// What an upsert did to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No row existed for the name; one was inserted.
    Created,
    /// A row existed; its secret value was overwritten.
    Replaced,
}

/// A stored secret's listing metadata (the value itself is not included).
#[derive(Debug, Clone)]
pub struct SecretEntry {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Name-keyed secret persistence with atomic replace-on-conflict upsert.
///
/// Invariant: at most one row per name. `upsert` on an existing name
/// mutates the secret value in place — it never creates a second row
/// and never touches `created_at`.
pub trait SecretStore {
    /// Point lookup by exact name.
    ///
    /// Returns [`MfaError::SecretNotFound`](crate::errors::MfaError::SecretNotFound)
    /// when no row exists for `name`.
    fn get(&self, name: &str) -> Result<String>;

    /// Insert or replace the secret for `name`, atomically.
    ///
    /// The secret text is stored exactly as provided; normalization
    /// (case folding, padding) happens in the codec at use time.
    fn upsert(&mut self, name: &str, secret: &str) -> Result<UpsertOutcome>;

    /// All stored secrets' names and creation times, sorted by name.
    fn list(&self) -> Result<Vec<SecretEntry>>;
}
