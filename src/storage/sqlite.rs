//! SQLite key/value backend.
//!
//! A single `state` table holds one row per key. WAL mode is enabled for
//! better read concurrency when a host keeps the database open alongside
//! other tooling.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::StateBackend;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Key/value state persisted in a SQLite database.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) the state database at the given path, with the schema
    /// initialized. Parent directories are created as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(SCHEMA_SQL)
            .context("failed to initialize schema")?;

        tracing::info!(path = %path.display(), "state database opened");
        Ok(Self { conn })
    }

    /// Open an in-memory database. Primarily for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        conn.execute_batch(SCHEMA_SQL)
            .context("failed to initialize schema")?;
        Ok(Self { conn })
    }
}

impl StateBackend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("failed to read state key '{key}'"))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO state (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| format!("failed to write state key '{key}'"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_is_none() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.get("nothing").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend.set("memos", "[]").unwrap();
        assert_eq!(backend.get("memos").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend.set("memoLayout", "list").unwrap();
        backend.set("memoLayout", "grid").unwrap();
        assert_eq!(backend.get("memoLayout").unwrap().as_deref(), Some("grid"));
    }
}
