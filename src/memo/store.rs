//! The memo collection and user preferences.
//!
//! [`MemoStore`] loads all state from its [`StateBackend`] once at open and
//! keeps it cached; every mutating call persists the changed state before the
//! cache is touched, so a failed write leaves the cache at the last
//! successfully persisted value and the error propagates to the caller.

use chrono::Utc;
use tracing::debug;

use crate::error::StoreError;
use crate::memo::types::{pick_color, Layout, Memo};
use crate::storage::StateBackend;

/// Persistence keys, kept identical to the original extension's global state
/// so an exported state dump stays recognizable.
const KEY_MEMOS: &str = "memos";
const KEY_PASSWORD: &str = "memoPassword";
const KEY_LAYOUT: &str = "memoLayout";
const KEY_TRIGGER_PREFIX: &str = "memoPromptPrefix";

/// The authoritative memo collection plus preferences.
///
/// Single-writer, synchronous. A host sharing a store across threads must
/// wrap it in a single mutex covering each whole read-modify-write call.
pub struct MemoStore<B: StateBackend> {
    backend: B,
    memos: Vec<Memo>,
    password: Option<String>,
    layout: Layout,
    trigger_prefix: String,
}

impl<B: StateBackend> MemoStore<B> {
    /// Load all state from the backend. Missing keys fall back to defaults:
    /// empty collection, no password, list layout, empty trigger prefix.
    pub fn open(backend: B) -> Result<Self, StoreError> {
        let memos = match backend.get(KEY_MEMOS)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        let password = backend.get(KEY_PASSWORD)?;
        let layout = backend
            .get(KEY_LAYOUT)?
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let trigger_prefix = backend.get(KEY_TRIGGER_PREFIX)?.unwrap_or_default();

        debug!(count = memos.len(), "memo store loaded");
        Ok(Self {
            backend,
            memos,
            password,
            layout,
            trigger_prefix,
        })
    }

    /// All memos in insertion order.
    pub fn list(&self) -> &[Memo] {
        &self.memos
    }

    /// Look up a single memo by id.
    pub fn get(&self, id: &str) -> Option<&Memo> {
        self.memos.iter().find(|m| m.id == id)
    }

    /// Create a memo with a fresh id and a random palette color, append it to
    /// the collection, and persist. Returns the new record.
    pub fn create(
        &mut self,
        title: Option<&str>,
        content: &str,
        keyword: Option<&str>,
    ) -> Result<Memo, StoreError> {
        let memo = Memo {
            id: self.fresh_id(),
            title: title.map(str::to_string),
            content: content.to_string(),
            keyword: normalize_keyword(keyword),
            color: pick_color(&mut rand::thread_rng()).to_string(),
        };

        let mut next = self.memos.clone();
        next.push(memo.clone());
        self.persist_memos(&next)?;
        self.memos = next;

        debug!(id = %memo.id, "memo created");
        Ok(memo)
    }

    /// Replace the mutable fields of an existing memo, preserving its id and
    /// color. Fails with [`StoreError::NotFound`] for an unknown id.
    pub fn update(
        &mut self,
        id: &str,
        title: Option<&str>,
        content: &str,
        keyword: Option<&str>,
    ) -> Result<Memo, StoreError> {
        let pos = self
            .memos
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut next = self.memos.clone();
        next[pos].title = title.map(str::to_string);
        next[pos].content = content.to_string();
        next[pos].keyword = normalize_keyword(keyword);
        let updated = next[pos].clone();

        self.persist_memos(&next)?;
        self.memos = next;

        debug!(id = %updated.id, "memo updated");
        Ok(updated)
    }

    /// Remove the memo with the given id. Returns whether a removal occurred;
    /// deleting an unknown id is a no-op, not an error. Callers are expected
    /// to have confirmed the deletion with the user already.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.memos.iter().any(|m| m.id == id) {
            return Ok(false);
        }

        let next: Vec<Memo> = self.memos.iter().filter(|m| m.id != id).cloned().collect();
        self.persist_memos(&next)?;
        self.memos = next;

        debug!(id, "memo deleted");
        Ok(true)
    }

    /// Empty the collection. Same caller-side confirmation expectation as
    /// [`delete`](Self::delete).
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.persist_memos(&[])?;
        self.memos.clear();
        debug!("memo store cleared");
        Ok(())
    }

    /// Presentation mode for the memo list.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) -> Result<(), StoreError> {
        self.backend.set(KEY_LAYOUT, layout.as_str())?;
        self.layout = layout;
        Ok(())
    }

    /// The configured completion trigger prefix. Empty means completion is
    /// disabled.
    pub fn trigger_prefix(&self) -> &str {
        &self.trigger_prefix
    }

    /// Set the trigger prefix, trimmed of surrounding whitespace.
    pub fn set_trigger_prefix(&mut self, prefix: &str) -> Result<(), StoreError> {
        let trimmed = prefix.trim();
        self.backend.set(KEY_TRIGGER_PREFIX, trimmed)?;
        self.trigger_prefix = trimmed.to_string();
        Ok(())
    }

    /// Whether an access password has been configured.
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Set or reset the password, unconditionally. Stored as a plain string
    /// for compatibility with the original state format.
    pub fn set_password(&mut self, password: &str) -> Result<(), StoreError> {
        self.backend.set(KEY_PASSWORD, password)?;
        self.password = Some(password.to_string());
        Ok(())
    }

    /// Exact string comparison against the stored password. `false` when no
    /// password is configured.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.as_deref() == Some(candidate)
    }

    /// Millisecond-timestamp id in the original's format, bumped past any id
    /// already in the collection so rapid creates stay unique.
    fn fresh_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.memos.iter().any(|m| m.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Serialize and write the full collection. Called before the cache is
    /// mutated so persistence failures leave the cache untouched.
    fn persist_memos(&mut self, memos: &[Memo]) -> Result<(), StoreError> {
        let json = serde_json::to_string(memos)?;
        self.backend.set(KEY_MEMOS, &json)?;
        Ok(())
    }
}

/// Trim a keyword on write; empty-after-trim normalizes to absent.
fn normalize_keyword(keyword: Option<&str>) -> Option<String> {
    keyword
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::types::COLOR_PALETTE;
    use crate::storage::MemoryBackend;

    fn test_store() -> MemoStore<MemoryBackend> {
        MemoStore::open(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn create_appears_exactly_once_in_list() {
        let mut store = test_store();
        let memo = store.create(Some("groceries"), "milk, eggs", None).unwrap();

        let matching: Vec<_> = store.list().iter().filter(|m| **m == memo).collect();
        assert_eq!(matching.len(), 1);
        assert!(COLOR_PALETTE.contains(&memo.color.as_str()));
    }

    #[test]
    fn ids_stay_unique_across_many_creates() {
        let mut store = test_store();
        for i in 0..50 {
            store.create(None, &format!("memo {i}"), None).unwrap();
        }

        let mut ids: Vec<_> = store.list().iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = test_store();
        let a = store.create(None, "first", None).unwrap();
        let b = store.create(None, "second", None).unwrap();
        let c = store.create(None, "third", None).unwrap();

        let ids: Vec<&str> = store.list().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn update_preserves_id_and_color() {
        let mut store = test_store();
        let created = store.create(Some("old"), "old body", Some("key")).unwrap();

        let updated = store
            .update(&created.id, Some("new"), "new body", Some("key2"))
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.color, created.color);
        assert_eq!(updated.title.as_deref(), Some("new"));
        assert_eq!(updated.content, "new body");
        assert_eq!(updated.keyword.as_deref(), Some("key2"));
    }

    #[test]
    fn update_unknown_id_is_not_found_and_leaves_list_unchanged() {
        let mut store = test_store();
        store.create(None, "only", None).unwrap();
        let before = store.list().to_vec();

        let err = store.update("no-such-id", None, "x", None).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn delete_twice_second_is_noop() {
        let mut store = test_store();
        let memo = store.create(None, "gone soon", None).unwrap();
        store.create(None, "stays", None).unwrap();

        assert!(store.delete(&memo.id).unwrap());
        let after_first = store.list().to_vec();

        assert!(!store.delete(&memo.id).unwrap());
        assert_eq!(store.list(), after_first.as_slice());
    }

    #[test]
    fn clear_empties_collection() {
        let mut store = test_store();
        store.create(None, "a", None).unwrap();
        store.create(None, "b", None).unwrap();

        store.clear().unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn keyword_is_trimmed_and_empty_normalizes_to_absent() {
        let mut store = test_store();
        let trimmed = store.create(None, "x", Some("  todo  ")).unwrap();
        assert_eq!(trimmed.keyword.as_deref(), Some("todo"));

        let blank = store.create(None, "y", Some("   ")).unwrap();
        assert_eq!(blank.keyword, None);
    }

    #[test]
    fn duplicate_keywords_are_allowed() {
        let mut store = test_store();
        store.create(None, "a", Some("dup")).unwrap();
        store.create(None, "b", Some("dup")).unwrap();

        let count = store
            .list()
            .iter()
            .filter(|m| m.keyword.as_deref() == Some("dup"))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn set_layout_is_idempotent() {
        let mut store = test_store();
        store.set_layout(Layout::Grid).unwrap();
        assert_eq!(store.layout(), Layout::Grid);
        store.set_layout(Layout::Grid).unwrap();
        assert_eq!(store.layout(), Layout::Grid);
    }

    #[test]
    fn trigger_prefix_is_persisted_trimmed() {
        let mut store = test_store();
        store.set_trigger_prefix("  ai ").unwrap();
        assert_eq!(store.trigger_prefix(), "ai");
    }

    #[test]
    fn password_flow() {
        let mut store = test_store();
        assert!(!store.has_password());
        assert!(!store.verify_password("anything"));

        store.set_password("s3cret").unwrap();
        assert!(store.has_password());
        assert!(store.verify_password("s3cret"));
        assert!(!store.verify_password("S3CRET"));

        // Reset is unconditional
        store.set_password("new").unwrap();
        assert!(store.verify_password("new"));
        assert!(!store.verify_password("s3cret"));
    }
}
