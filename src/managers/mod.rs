// BookmarkSieve state managers
// Managers own mutable state: the bookmark store and the file-bound bookmark manager.

pub mod bookmark_manager;
pub mod bookmark_store;
