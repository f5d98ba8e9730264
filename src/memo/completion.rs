//! Trigger-based completion matching.
//!
//! The host calls [`suggest`] with the text of the current line up to the
//! cursor on every edit-position change. The engine pulls the trigger prefix
//! and memo list from the store on each call; no state is cached between
//! calls. A memo is a candidate when the user has typed the trigger prefix
//! followed by a dot and (optionally) the start of the memo's keyword, e.g.
//! with prefix `ai` and keyword `ask`, the line `hello ai.as` suggests that
//! memo with a replacement span covering `ai.as`.

use regex::Regex;
use serde::Serialize;

use crate::memo::store::MemoStore;
use crate::storage::StateBackend;

/// A candidate completion.
///
/// `replace_from`/`replace_to` are byte offsets into the line passed to
/// [`suggest`]; on acceptance the host replaces that span with `insert_text`.
/// The span covers exactly the trigger prefix, the dot, and the partial
/// keyword, ending at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The memo's completion keyword, as stored.
    pub keyword: String,
    /// The memo content inserted on acceptance.
    pub insert_text: String,
    /// Human-readable label derived from the memo title.
    pub detail: String,
    /// Start of the span to replace.
    pub replace_from: usize,
    /// End of the span to replace (the cursor position).
    pub replace_to: usize,
}

/// Compute completion suggestions for the current line up to the cursor.
///
/// Returns an empty list when no trigger prefix is configured (or the prefix
/// ends with a dot — treated as misconfiguration), when the line is not
/// mid-trigger, or when no keyword matches the typed partial. Keyword
/// filtering is a case-insensitive starts-with test; results keep the store's
/// insertion order with no further ranking.
pub fn suggest<B: StateBackend>(store: &MemoStore<B>, line_before_cursor: &str) -> Vec<Suggestion> {
    let prefix = store.trigger_prefix();
    if prefix.is_empty() || prefix.ends_with('.') {
        return Vec::new();
    }

    // The prefix is user data, not pattern syntax — escape it so a prefix
    // like `a.b` matches literally.
    let pattern = format!("{}\\.([A-Za-z0-9_]*)$", regex::escape(prefix));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let caps = match re.captures(line_before_cursor) {
        Some(caps) => caps,
        None => return Vec::new(),
    };
    let whole = caps.get(0).expect("group 0 always present on a match");
    let partial = caps.get(1).map_or("", |m| m.as_str());
    let partial_lower = partial.to_lowercase();

    store
        .list()
        .iter()
        .filter_map(|memo| {
            let keyword = memo.keyword.as_deref()?.trim();
            if keyword.is_empty() {
                return None;
            }
            if !partial.is_empty() && !keyword.to_lowercase().starts_with(&partial_lower) {
                return None;
            }
            Some(Suggestion {
                keyword: keyword.to_string(),
                insert_text: memo.content.clone(),
                detail: match &memo.title {
                    Some(title) => format!("Memo: {title}"),
                    None => "Memo".to_string(),
                },
                replace_from: whole.start(),
                replace_to: whole.end(),
            })
        })
        .collect()
}
