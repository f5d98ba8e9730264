//! Password-gated memo snippets with trigger-word inline completion.
//!
//! Memopad stores short text snippets (title, body, optional completion
//! keyword) and expands them into whatever text the user is editing: typing a
//! configured trigger prefix, a dot, and a fragment of a snippet's keyword
//! (e.g. `ai.as` for a snippet keyed `ask`) surfaces the snippet as a
//! completion that replaces exactly the typed trigger run.
//!
//! # Architecture
//!
//! - **Storage**: a minimal key/value [`storage::StateBackend`] trait, with a
//!   SQLite implementation for on-disk state and a HashMap one for tests and
//!   embedding hosts
//! - **Store**: [`memo::MemoStore`] owns the memo collection and preferences
//!   (password, layout, trigger prefix); loaded once, persisted synchronously
//!   on every mutation
//! - **Completion**: [`memo::suggest`] matches the current line against the
//!   trigger pattern and returns candidates with exact replacement spans
//! - **Host**: a small CLI drives the store and handles confirmation for
//!   destructive operations
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — The store error taxonomy
//! - [`memo`] — Core engine: memo types, the store, and trigger completion
//! - [`storage`] — Key/value persistence backends

pub mod config;
pub mod error;
pub mod memo;
pub mod storage;

pub use error::StoreError;
pub use memo::{suggest, Layout, Memo, MemoStore, Suggestion};
pub use storage::{MemoryBackend, StateBackend};
