//! Unit tests for the BookmarkStore public API.
//!
//! These tests exercise create/update/delete (single and bulk), URL index
//! consistency, keyword search and extraction through `BookmarkStoreTrait`.

use bookmarksieve::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use bookmarksieve::types::bookmark::Bookmark;
use bookmarksieve::types::search::{SearchField, SearchOptions};
use rstest::rstest;

/// Helper: a store holding a small, varied collection.
fn seeded() -> BookmarkStore {
    let mut store = BookmarkStore::new();
    store.create_many(vec![
        Bookmark::new("Rust Programming Language", "https://www.rust-lang.org/", "Bookmarks"),
        Bookmark::new("Python", "https://python.org/", "Languages"),
        Bookmark::new("Docs.rs - Rust crate docs", "https://docs.rs/", "Work > Rust"),
        Bookmark::new("Hacker News", "https://news.ycombinator.com/", "News"),
    ]);
    store
}

#[test]
fn test_create_rejects_duplicate_url() {
    let mut store = BookmarkStore::new();
    let first = store.create(Bookmark::new("A", "https://a.com", "")).unwrap();

    let dup = store.create(Bookmark::new("Another A", "https://a.com", "Elsewhere"));
    assert!(dup.is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_url("https://a.com"), Some(first.id.as_str()));
    assert_eq!(store.find_by_id(&first.id).unwrap().title, "A");
}

#[test]
fn test_create_many_counts_successes() {
    let mut store = BookmarkStore::new();
    let created = store.create_many(vec![
        Bookmark::new("A", "https://a.com", ""),
        Bookmark::new("B", "https://b.com", ""),
        Bookmark::new("A again", "https://a.com", ""),
    ]);
    assert_eq!(created, 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_get_all_preserves_insertion_order() {
    let store = seeded();
    let titles: Vec<String> = store.get_all().into_iter().map(|b| b.title).collect();
    assert_eq!(
        titles,
        vec![
            "Rust Programming Language",
            "Python",
            "Docs.rs - Rust crate docs",
            "Hacker News",
        ]
    );
}

#[test]
fn test_find_unknown_returns_none() {
    let store = seeded();
    assert!(store.find_by_id("missing").is_none());
    assert!(store.find_by_url("https://missing.example").is_none());
}

#[test]
fn test_update_without_url_change_keeps_index() {
    let mut store = BookmarkStore::new();
    let bm = store.create(Bookmark::new("Old", "https://a.com", "")).unwrap();
    let before = store.indexed_urls();

    let mut changed = bm.clone();
    changed.title = "New".to_string();
    assert!(store.update(&bm.id, changed).is_some());

    assert_eq!(store.indexed_urls(), before);
    assert_eq!(store.find_by_url("https://a.com"), Some(bm.id.as_str()));
    assert_eq!(store.find_by_id(&bm.id).unwrap().title, "New");
}

#[test]
fn test_update_with_url_change_moves_index() {
    let mut store = BookmarkStore::new();
    let bm = store.create(Bookmark::new("A", "https://a.com", "")).unwrap();

    let mut moved = bm.clone();
    moved.url = "https://a.org".to_string();
    store.update(&bm.id, moved).unwrap();

    assert!(store.find_by_url("https://a.com").is_none());
    assert_eq!(store.find_by_url("https://a.org"), Some(bm.id.as_str()));
    // The old URL is free again
    assert!(store.create(Bookmark::new("A2", "https://a.com", "")).is_some());
}

#[test]
fn test_update_unknown_id() {
    let mut store = seeded();
    let result = store.update("missing", Bookmark::new("X", "https://x.com", ""));
    assert!(result.is_none());
    assert!(store.find_by_url("https://x.com").is_none());
}

#[test]
fn test_update_keeps_stored_id_when_record_carries_another() {
    let mut store = BookmarkStore::new();
    let a = store.create(Bookmark::new("A", "https://a.com", "")).unwrap();
    let b = store.create(Bookmark::new("B", "https://b.com", "")).unwrap();

    let replacement = Bookmark {
        id: b.id.clone(),
        ..Bookmark::new("C", "https://c.com", "")
    };
    let updated = store.update(&a.id, replacement).unwrap();
    assert_eq!(updated.id, a.id);

    let ids: Vec<String> = store.get_all().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a.id.clone(), b.id.clone()]);
    assert_eq!(store.find_by_id(&a.id).unwrap().title, "C");
    assert_eq!(store.find_by_url("https://c.com"), Some(a.id.as_str()));

    let options = SearchOptions::including(["c.com"]);
    let picked = store.pick_by(&options);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].title, "C");

    let titles: Vec<String> = store.get_all().into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["B"]);
    assert!(store.search_by(&options).is_empty());
}

#[test]
fn test_update_many_uses_each_records_id() {
    let mut store = seeded();
    let mut all = store.get_all();
    for b in &mut all {
        b.folder = "Moved".to_string();
    }
    all.push(Bookmark::new("Ghost", "https://ghost.com", ""));

    assert_eq!(store.update_many(all), 4);
    assert!(store.get_all().iter().all(|b| b.folder == "Moved"));
}

#[test]
fn test_delete_removes_url_mapping() {
    let mut store = seeded();
    let id = store.find_by_url("https://python.org/").unwrap().to_string();

    assert!(store.delete(&id));
    assert!(!store.delete(&id));
    assert!(store.find_by_url("https://python.org/").is_none());
    assert_eq!(store.len(), 3);
    assert_eq!(store.indexed_urls(), 3);
}

#[test]
fn test_delete_many_counts_successes() {
    let mut store = seeded();
    let mut ids: Vec<String> = store.get_all().iter().take(2).map(|b| b.id.clone()).collect();
    ids.push("missing".to_string());

    assert_eq!(store.delete_many(&ids), 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_clear_empties_everything() {
    let mut store = seeded();
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.indexed_urls(), 0);
    assert!(store.find_by_url("https://docs.rs/").is_none());
}

#[rstest]
#[case::single_term(vec!["rust"], vec![], false, 2)]
#[case::or_terms(vec!["python", "news"], vec![], false, 2)]
#[case::and_terms(vec!["rust", "docs"], vec![], true, 1)]
#[case::exclude(vec!["rust"], vec!["docs"], false, 1)]
#[case::no_match(vec!["haskell"], vec![], false, 0)]
#[case::empty_include(vec![], vec![], false, 0)]
fn test_search_by_semantics(
    #[case] include: Vec<&str>,
    #[case] exclude: Vec<&str>,
    #[case] all: bool,
    #[case] expected: usize,
) {
    let store = seeded();
    let options = SearchOptions::including(include)
        .excluding(exclude)
        .include_all_words(all);
    assert_eq!(store.search_by(&options).len(), expected);
}

#[test]
fn test_whitespace_terms_are_substrings() {
    let mut store = BookmarkStore::new();
    store.create(Bookmark::new("alpha beta", "https://one.test", ""));
    store.create(Bookmark::new("gamma", "https://two.test", ""));
    let titles = [SearchField::Title];

    let spaced = SearchOptions::including([" "]).search_in(&titles);
    let results = store.search_by(&spaced);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "alpha beta");

    let excluded = SearchOptions::including(["alpha"]).excluding([" "]);
    assert!(store.search_by(&excluded).is_empty());

    // Only the empty string is dropped
    assert!(store.search_by(&SearchOptions::including([""])).is_empty());
}

#[test]
fn test_search_case_sensitivity() {
    let store = seeded();

    let insensitive = SearchOptions::including(["PYTHON"]);
    assert_eq!(store.search_by(&insensitive).len(), 1);

    let sensitive = SearchOptions::including(["PYTHON"]).case_sensitive(true);
    assert!(store.search_by(&sensitive).is_empty());

    let exact = SearchOptions::including(["Python"]).case_sensitive(true);
    assert_eq!(store.search_by(&exact).len(), 1);
}

#[test]
fn test_search_in_folder_only() {
    let store = seeded();

    let folder_only = SearchOptions::including(["work"]).search_in(&[SearchField::Folder]);
    let results = store.search_by(&folder_only);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://docs.rs/");

    // Folder is not searched by default
    assert!(store.search_by(&SearchOptions::including(["work"])).is_empty());
}

#[test]
fn test_search_spans_joined_fields() {
    let mut store = BookmarkStore::new();
    store.create(Bookmark::new("alpha", "beta", ""));

    // Title and URL are joined with a single space
    assert_eq!(store.search_by(&SearchOptions::including(["alpha beta"])).len(), 1);
}

#[test]
fn test_pick_by_removes_matches() {
    let mut store = seeded();
    let options = SearchOptions::including(["rust"]);

    let picked = store.pick_by(&options);
    assert_eq!(picked.len(), 2);
    assert_eq!(store.len(), 2);
    for bm in &picked {
        assert!(store.find_by_id(&bm.id).is_none());
        assert!(store.find_by_url(&bm.url).is_none());
    }
    assert!(store.search_by(&options).is_empty());
}

#[test]
fn test_order_by_domain_is_stable() {
    let mut store = BookmarkStore::new();
    store.create_many(vec![
        Bookmark::new("Z2", "https://zeta.io/2", ""),
        Bookmark::new("A1", "https://www.alpha.com/1", ""),
        Bookmark::new("Z1", "https://zeta.io/1", ""),
        Bookmark::new("A2", "http://ALPHA.com/2", ""),
        Bookmark::new("M", "https://mid.net", ""),
    ]);

    store.order_by_domain();
    let titles: Vec<String> = store.get_all().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["A1", "A2", "M", "Z2", "Z1"]);

    // Lookups are unaffected by reordering
    let z1 = store.find_by_url("https://zeta.io/1").unwrap().to_string();
    assert_eq!(store.find_by_id(&z1).unwrap().title, "Z1");
}
