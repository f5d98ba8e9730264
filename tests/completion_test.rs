mod helpers;

use helpers::{seeded_store, test_store};
use memopad::suggest;

#[test]
fn suggestions_follow_store_order_with_exact_spans() {
    let store = seeded_store("ai", &[("ask body", "ask"), ("answer body", "answer")]);

    let suggestions = suggest(&store, "hello ai.a");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].keyword, "ask");
    assert_eq!(suggestions[1].keyword, "answer");

    for s in &suggestions {
        assert_eq!(s.replace_from, 6);
        assert_eq!(s.replace_to, 10);
        assert_eq!(&"hello ai.a"[s.replace_from..s.replace_to], "ai.a");
    }
}

#[test]
fn unmatched_partial_yields_nothing() {
    let store = seeded_store("ai", &[("ask body", "ask"), ("answer body", "answer")]);
    assert!(suggest(&store, "hello ai.z").is_empty());
}

#[test]
fn completion_is_disabled_without_prefix() {
    let store = seeded_store("", &[("ask body", "ask")]);
    assert!(suggest(&store, "hello ai.a").is_empty());
    assert!(suggest(&store, "ask").is_empty());
}

#[test]
fn prefix_metacharacters_are_literal() {
    let store = seeded_store("a.b", &[("body", "x")]);

    let hits = suggest(&store, "a.b.x");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].keyword, "x");

    assert!(suggest(&store, "aXbXsomething.x").is_empty());
}

#[test]
fn suggestion_carries_content_and_detail() {
    let mut store = test_store();
    store.set_trigger_prefix("memo").unwrap();
    store
        .create(Some("Standup"), "Daily sync at 10am", Some("standup"))
        .unwrap();

    let hits = suggest(&store, "memo.st");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].insert_text, "Daily sync at 10am");
    assert_eq!(hits[0].detail, "Memo: Standup");
}

#[test]
fn keywordless_memos_never_complete() {
    let mut store = seeded_store("ai", &[("visible", "seen")]);
    store.create(None, "invisible", None).unwrap();

    let hits = suggest(&store, "ai.");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].keyword, "seen");
}

#[test]
fn any_input_is_safe() {
    let store = seeded_store("ai", &[("body", "ask")]);
    for line in ["", ".", "ai", "ai.", "ai.a", "日本語 ai.a", "\t\nai.a"] {
        // Must never panic; matching is anchored at the end of the line.
        let _ = suggest(&store, line);
    }
}
