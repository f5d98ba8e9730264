//! Key/value persistence backends.
//!
//! The store talks to persistence through [`StateBackend`], a minimal string
//! key/value surface with read-your-writes semantics: a `get` issued after a
//! successful `set` of the same key must observe the written value. The crate
//! ships a [`MemoryBackend`] for tests and embedding hosts and a
//! [`SqliteBackend`](sqlite::SqliteBackend) for on-disk state.

pub mod sqlite;

use anyhow::Result;
use std::collections::HashMap;

/// Synchronous key/value persistence.
pub trait StateBackend {
    /// Fetch the value stored under `key`, or `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// HashMap-backed backend. State lives for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
