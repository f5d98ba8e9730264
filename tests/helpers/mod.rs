#![allow(dead_code)]

use anyhow::{bail, Result};
use memopad::storage::{MemoryBackend, StateBackend};
use memopad::MemoStore;

/// Open a fresh store on an in-memory backend.
pub fn test_store() -> MemoStore<MemoryBackend> {
    MemoStore::open(MemoryBackend::new()).unwrap()
}

/// Open a store with a trigger prefix and a set of `(content, keyword)` memos.
pub fn seeded_store(prefix: &str, memos: &[(&str, &str)]) -> MemoStore<MemoryBackend> {
    let mut store = test_store();
    store.set_trigger_prefix(prefix).unwrap();
    for &(content, keyword) in memos {
        store.create(None, content, Some(keyword)).unwrap();
    }
    store
}

/// Backend whose writes fail after a configurable number of successes.
/// Reads always succeed, so a store can open against it.
pub struct FailingBackend {
    inner: MemoryBackend,
    writes_left: usize,
}

impl FailingBackend {
    pub fn after_writes(writes_left: usize) -> Self {
        Self {
            inner: MemoryBackend::new(),
            writes_left,
        }
    }
}

impl StateBackend for FailingBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.writes_left == 0 {
            bail!("backend write failed");
        }
        self.writes_left -= 1;
        self.inner.set(key, value)
    }
}
