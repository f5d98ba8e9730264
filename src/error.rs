//! Store error taxonomy.

use thiserror::Error;

/// Errors surfaced by [`MemoStore`](crate::memo::store::MemoStore) operations.
///
/// `NotFound` is a recoverable outcome the caller handles locally; the other
/// variants mean a persistence round-trip failed and the in-memory state was
/// left at the last successfully persisted value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An update or delete referenced an id absent from the collection.
    #[error("memo not found: {0}")]
    NotFound(String),

    /// Persisted state could not be encoded or decoded as JSON.
    #[error("state serialization failed: {0}")]
    Codec(#[from] serde_json::Error),

    /// The persistence backend failed on read or write.
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

impl StoreError {
    /// `true` for the locally-recoverable missing-id case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
