//! Property-based tests for BookmarkStore operations.
//!
//! These tests verify that the URL index stays consistent with the stored
//! records under arbitrary sequences of creates, updates and deletes.

use std::collections::HashSet;

use bookmarksieve::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use bookmarksieve::types::bookmark::Bookmark;
use proptest::prelude::*;

/// Strategy for generating URLs from a small pool so collisions are frequent.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-e]{1,2}",
        prop_oneof![Just(".com"), Just(".org")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,20}"
}

#[derive(Debug, Clone)]
enum Op {
    Create(String, String),
    UpdateUrl(usize, String),
    Delete(usize),
    Pick(String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (arb_title(), arb_url()).prop_map(|(t, u)| Op::Create(t, u)),
        1 => (any::<usize>(), arb_url()).prop_map(|(i, u)| Op::UpdateUrl(i, u)),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => "[a-e]".prop_map(Op::Pick),
    ]
}

/// Updates only ever move a record to a URL no other record owns, so the
/// store must keep exactly one index entry per record.
fn apply(store: &mut BookmarkStore, op: Op) {
    match op {
        Op::Create(title, url) => {
            store.create(Bookmark::new(title, url, ""));
        }
        Op::UpdateUrl(i, url) => {
            let all = store.get_all();
            if all.is_empty() || store.find_by_url(&url).is_some() {
                return;
            }
            let target = all[i % all.len()].clone();
            let id = target.id.clone();
            store.update(&id, Bookmark { url, ..target });
        }
        Op::Delete(i) => {
            let all = store.get_all();
            if !all.is_empty() {
                store.delete(&all[i % all.len()].id);
            }
        }
        Op::Pick(word) => {
            let options = bookmarksieve::types::search::SearchOptions::including([word]);
            store.pick_by(&options);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// At most one stored record ever holds a given URL, and a duplicate
    /// create never changes the store.
    #[test]
    fn url_uniqueness_holds_for_create_sequences(
        entries in proptest::collection::vec((arb_title(), arb_url()), 1..40),
    ) {
        let mut store = BookmarkStore::new();
        for (title, url) in entries {
            let existed = store.find_by_url(&url).is_some();
            let before = store.get_all();

            let created = store.create(Bookmark::new(title, url.clone(), ""));

            if existed {
                prop_assert!(created.is_none());
                prop_assert_eq!(store.get_all(), before);
            } else {
                prop_assert!(created.is_some());
            }
        }

        let urls: Vec<String> = store.get_all().into_iter().map(|b| b.url).collect();
        let unique: HashSet<&String> = urls.iter().collect();
        prop_assert_eq!(unique.len(), urls.len());
    }

    /// After any mix of operations, every URL lookup resolves to a live record
    /// carrying that URL, and every record is reachable by its URL.
    #[test]
    fn url_index_never_points_at_deleted_records(
        ops in proptest::collection::vec(arb_op(), 1..60),
    ) {
        let mut store = BookmarkStore::new();
        let mut seen_urls: HashSet<String> = HashSet::new();

        for op in ops {
            match &op {
                Op::Create(_, url) | Op::UpdateUrl(_, url) => {
                    seen_urls.insert(url.clone());
                }
                _ => {}
            }
            apply(&mut store, op);

            prop_assert_eq!(store.indexed_urls(), store.len());
            for b in store.get_all() {
                prop_assert_eq!(store.find_by_url(&b.url), Some(b.id.as_str()));
            }
            for url in &seen_urls {
                if let Some(id) = store.find_by_url(url) {
                    let owner = store.find_by_id(id);
                    prop_assert!(owner.is_some(), "{} resolves to deleted id {}", url, id);
                    prop_assert_eq!(&owner.unwrap().url, url);
                }
            }
        }
    }

    /// `create_many` reports exactly how many records were added.
    #[test]
    fn create_many_count_matches_growth(
        entries in proptest::collection::vec((arb_title(), arb_url()), 0..30),
    ) {
        let mut store = BookmarkStore::new();
        let batch: Vec<Bookmark> = entries
            .into_iter()
            .map(|(t, u)| Bookmark::new(t, u, ""))
            .collect();
        let distinct: HashSet<String> = batch.iter().map(|b| b.url.clone()).collect();

        let created = store.create_many(batch);
        prop_assert_eq!(created, distinct.len());
        prop_assert_eq!(store.len(), distinct.len());
    }
}
