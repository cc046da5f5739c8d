//! In-memory bookmark store.
//!
//! Records are kept in insertion order and indexed by URL. Every mutation
//! updates both maps in the same call, so `find_by_url` always agrees with
//! the records that are actually stored, except for the accepted case of an
//! update that moves a record onto a URL another record already owns.

use std::collections::HashMap;

use indexmap::IndexMap;
use url::Url;

use crate::types::bookmark::Bookmark;
use crate::types::search::{SearchField, SearchOptions};

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    fn create(&mut self, bookmark: Bookmark) -> Option<Bookmark>;
    fn create_many(&mut self, bookmarks: Vec<Bookmark>) -> usize;
    fn find_by_id(&self, id: &str) -> Option<&Bookmark>;
    fn find_by_url(&self, url: &str) -> Option<&str>;
    fn update(&mut self, id: &str, bookmark: Bookmark) -> Option<Bookmark>;
    fn update_many(&mut self, bookmarks: Vec<Bookmark>) -> usize;
    fn delete(&mut self, id: &str) -> bool;
    fn delete_many(&mut self, ids: &[String]) -> usize;
    fn search_by(&self, options: &SearchOptions) -> Vec<Bookmark>;
    fn pick_by(&mut self, options: &SearchOptions) -> Vec<Bookmark>;
    fn order_by_domain(&mut self);
    fn get_all(&self) -> Vec<Bookmark>;
    fn clear(&mut self);
}

/// Bookmark store with a unique-URL index.
#[derive(Debug, Default, Clone)]
pub struct BookmarkStore {
    records: IndexMap<String, Bookmark>,
    url_index: HashMap<String, String>,
}

/// Search terms prepared once per query.
struct Matcher {
    include: Vec<String>,
    exclude: Vec<String>,
    case_sensitive: bool,
    search_in: Vec<SearchField>,
    include_all: bool,
}

impl Matcher {
    fn new(options: &SearchOptions) -> Self {
        let fold = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .filter(|w| !w.is_empty())
                .map(|w| {
                    if options.case_sensitive {
                        w.clone()
                    } else {
                        w.to_lowercase()
                    }
                })
                .collect()
        };

        Self {
            include: fold(&options.include_words),
            exclude: fold(&options.exclude_words),
            case_sensitive: options.case_sensitive,
            search_in: options.search_in.clone(),
            include_all: options.include_all_words,
        }
    }

    /// Joins the selected fields in title, url, folder order.
    fn search_text(&self, bookmark: &Bookmark) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if self.search_in.contains(&SearchField::Title) {
            parts.push(&bookmark.title);
        }
        if self.search_in.contains(&SearchField::Url) {
            parts.push(&bookmark.url);
        }
        if self.search_in.contains(&SearchField::Folder) && !bookmark.folder.is_empty() {
            parts.push(&bookmark.folder);
        }

        let text = parts.join(" ");
        if self.case_sensitive {
            text
        } else {
            text.to_lowercase()
        }
    }

    fn matches(&self, bookmark: &Bookmark) -> bool {
        if self.include.is_empty() {
            return false;
        }

        let text = self.search_text(bookmark);
        let included = if self.include_all {
            self.include.iter().all(|w| text.contains(w.as_str()))
        } else {
            self.include.iter().any(|w| text.contains(w.as_str()))
        };

        included && !self.exclude.iter().any(|w| text.contains(w.as_str()))
    }
}

/// Sort key used by `order_by_domain`.
fn domain_key(raw: &str) -> String {
    let host = Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| raw.to_string())
        .to_lowercase();

    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of URL index entries. Always equals `len()` unless an update
    /// collided with another record's URL.
    pub fn indexed_urls(&self) -> usize {
        self.url_index.len()
    }

    fn remove(&mut self, id: &str) -> Option<Bookmark> {
        let removed = self.records.shift_remove(id)?;
        if self.url_index.get(&removed.url).map(String::as_str) == Some(id) {
            self.url_index.remove(&removed.url);
        }
        Some(removed)
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Stores `bookmark` unless its URL is already present.
    fn create(&mut self, bookmark: Bookmark) -> Option<Bookmark> {
        if self.url_index.contains_key(&bookmark.url) {
            return None;
        }

        self.url_index.insert(bookmark.url.clone(), bookmark.id.clone());
        self.records.insert(bookmark.id.clone(), bookmark.clone());
        Some(bookmark)
    }

    /// Returns how many bookmarks were stored. Duplicates are skipped.
    fn create_many(&mut self, bookmarks: Vec<Bookmark>) -> usize {
        bookmarks
            .into_iter()
            .filter_map(|b| self.create(b))
            .count()
    }

    fn find_by_id(&self, id: &str) -> Option<&Bookmark> {
        self.records.get(id)
    }

    fn find_by_url(&self, url: &str) -> Option<&str> {
        self.url_index.get(url).map(String::as_str)
    }

    /// Replaces the record stored under `id`, keeping its position.
    ///
    /// The stored record always keeps `id`, whatever `bookmark.id` says. A URL
    /// already owned by another record is not rejected; the index entry is
    /// re-pointed at `id`.
    fn update(&mut self, id: &str, mut bookmark: Bookmark) -> Option<Bookmark> {
        let existing = self.records.get_mut(id)?;
        bookmark.id = id.to_string();

        if existing.url != bookmark.url {
            if self.url_index.get(&existing.url).map(String::as_str) == Some(id) {
                self.url_index.remove(&existing.url);
            }
            self.url_index.insert(bookmark.url.clone(), id.to_string());
        }

        *existing = bookmark.clone();
        Some(bookmark)
    }

    /// Updates each bookmark under its own `id`. Unknown IDs are skipped.
    fn update_many(&mut self, bookmarks: Vec<Bookmark>) -> usize {
        bookmarks
            .into_iter()
            .filter_map(|b| {
                let id = b.id.clone();
                self.update(&id, b)
            })
            .count()
    }

    /// Removes the record and its URL index entry.
    fn delete(&mut self, id: &str) -> bool {
        self.remove(id).is_some()
    }

    fn delete_many(&mut self, ids: &[String]) -> usize {
        ids.iter().filter(|id| self.delete(id)).count()
    }

    /// Returns bookmarks matching the keyword filter, in store order.
    fn search_by(&self, options: &SearchOptions) -> Vec<Bookmark> {
        let matcher = Matcher::new(options);
        self.records
            .values()
            .filter(|b| matcher.matches(b))
            .cloned()
            .collect()
    }

    /// Like `search_by`, but removes every match from the store.
    fn pick_by(&mut self, options: &SearchOptions) -> Vec<Bookmark> {
        let matcher = Matcher::new(options);
        let keys: Vec<String> = self
            .records
            .iter()
            .filter(|(_, b)| matcher.matches(b))
            .map(|(key, _)| key.clone())
            .collect();

        keys.iter().filter_map(|key| self.remove(key)).collect()
    }

    /// Reorders records by host name. Records on the same host keep their order.
    fn order_by_domain(&mut self) {
        self.records
            .sort_by(|_, a, _, b| domain_key(&a.url).cmp(&domain_key(&b.url)));
    }

    fn get_all(&self) -> Vec<Bookmark> {
        self.records.values().cloned().collect()
    }

    fn clear(&mut self) {
        self.records.clear();
        self.url_index.clear();
    }
}
