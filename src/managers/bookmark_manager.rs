//! Bookmark Manager for BookmarkSieve.
//!
//! Ties the store, the HTML parser and file access together: load a bookmark
//! export, edit or filter it in memory, then write it (or a subset of it) back
//! out in the same format.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::event_log::{EventLog, TracingLog};
use crate::services::file_handler::{FileHandlerTrait, FsFileHandler};
use crate::services::html_parser::{HtmlParser, HtmlParserTrait};
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::search::SearchOptions;
use crate::types::settings::SieveSettings;

/// Which field `delete_bookmarks` uses to identify records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteKey {
    #[default]
    Id,
    Url,
}

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn load_bookmarks(&mut self) -> Result<usize, BookmarkError>;
    fn save_bookmarks(&self) -> Result<usize, BookmarkError>;
    fn save_output_bookmarks(&self, bookmarks: &[Bookmark], file_name: &str) -> Result<PathBuf, BookmarkError>;
    fn delete_file(&self) -> Result<(), BookmarkError>;
    fn add_bookmark(&mut self, bookmark: Bookmark) -> Option<Bookmark>;
    fn add_bookmarks(&mut self, bookmarks: Vec<Bookmark>, folder: Option<&str>) -> usize;
    fn update_bookmark(&mut self, id: &str, bookmark: Bookmark) -> Option<Bookmark>;
    fn update_bookmarks(&mut self, bookmarks: Vec<Bookmark>) -> usize;
    fn delete_bookmark(&mut self, id: &str) -> bool;
    fn delete_bookmarks(&mut self, bookmarks: &[Bookmark], key: DeleteKey) -> usize;
    fn search_bookmarks_by(&self, options: &SearchOptions) -> Vec<Bookmark>;
    fn extract_bookmarks_by(&mut self, options: &SearchOptions) -> Vec<Bookmark>;
    fn order_bookmarks_by_domain(&mut self);
    fn get_all_bookmarks(&self) -> Vec<Bookmark>;
}

/// Bookmark manager bound to one bookmark file on disk.
pub struct BookmarkManager {
    path: PathBuf,
    settings: SieveSettings,
    store: BookmarkStore,
    parser: HtmlParser,
    files: Box<dyn FileHandlerTrait>,
    log: Arc<dyn EventLog>,
}

impl BookmarkManager {
    /// Creates an empty manager for `path` using the filesystem and `tracing`.
    pub fn new(path: impl Into<PathBuf>, settings: SieveSettings) -> Self {
        Self::with_collaborators(path, settings, Box::new(FsFileHandler::new()), Arc::new(TracingLog))
    }

    /// Creates an empty manager with explicit file access and logging.
    pub fn with_collaborators(
        path: impl Into<PathBuf>,
        settings: SieveSettings,
        files: Box<dyn FileHandlerTrait>,
        log: Arc<dyn EventLog>,
    ) -> Self {
        let parser = HtmlParser::new(&settings);
        Self {
            path: path.into(),
            settings,
            store: BookmarkStore::new(),
            parser,
            files,
            log,
        }
    }

    /// Creates a manager for `path` and loads its bookmarks.
    pub fn open(path: impl Into<PathBuf>, settings: SieveSettings) -> Result<Self, BookmarkError> {
        let mut manager = Self::new(path, settings);
        manager.load_bookmarks()?;
        Ok(manager)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &SieveSettings {
        &self.settings
    }

    /// Replaces the settings and rebuilds the parser. Stored records are kept as they are.
    pub fn apply_settings(&mut self, settings: SieveSettings) {
        self.parser = HtmlParser::new(&settings);
        self.settings = settings;
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    /// Path that `save_output_bookmarks` writes `file_name` to.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.settings.staged_dir).join(format!("{}.html", file_name))
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Reads and parses the managed file, adding every bookmark whose URL is new.
    ///
    /// Returns how many bookmarks were added.
    fn load_bookmarks(&mut self) -> Result<usize, BookmarkError> {
        let content = match self.files.read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                self.log.error(&format!("Failed to load bookmarks: {}", e));
                return Err(e);
            }
        };

        let parsed = self.parser.parse(&content);
        let created = self.store.create_many(parsed);

        self.log.info(&format!(
            "Loaded {} bookmarks ({} new)",
            self.store.len(),
            created
        ));
        Ok(created)
    }

    /// Writes every stored bookmark back to the managed file.
    fn save_bookmarks(&self) -> Result<usize, BookmarkError> {
        let bookmarks = self.store.get_all();
        if bookmarks.is_empty() {
            self.log.warn("No bookmarks to save");
        }

        let html = self.parser.serialize(&bookmarks);
        if let Err(e) = self.files.write(&self.path, &html) {
            self.log.error(&format!("Failed to save bookmarks: {}", e));
            return Err(e);
        }

        self.log.info(&format!(
            "Saved {} bookmarks to {}",
            bookmarks.len(),
            self.path.display()
        ));
        Ok(bookmarks.len())
    }

    /// Writes `bookmarks` to `<staged_dir>/<file_name>.html`.
    fn save_output_bookmarks(&self, bookmarks: &[Bookmark], file_name: &str) -> Result<PathBuf, BookmarkError> {
        if file_name.trim().is_empty() {
            return Err(BookmarkError::InvalidInput("file name cannot be empty".to_string()));
        }
        if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
            return Err(BookmarkError::InvalidInput(format!(
                "file name must not be a path: {}",
                file_name
            )));
        }
        if bookmarks.is_empty() {
            self.log.warn("No bookmarks to save");
        }

        let target = self.output_path(file_name);
        let html = self.parser.serialize(bookmarks);
        if let Err(e) = self.files.write(&target, &html) {
            self.log.error(&format!("Failed to save output bookmarks: {}", e));
            return Err(e);
        }

        self.log.info(&format!(
            "Saved {} bookmarks to {}",
            bookmarks.len(),
            target.display()
        ));
        Ok(target)
    }

    fn delete_file(&self) -> Result<(), BookmarkError> {
        if let Err(e) = self.files.delete(&self.path) {
            self.log.error(&format!("Failed to delete file: {}", e));
            return Err(e);
        }
        self.log.info(&format!("Deleted file: {}", self.path.display()));
        Ok(())
    }

    fn add_bookmark(&mut self, bookmark: Bookmark) -> Option<Bookmark> {
        self.store.create(bookmark)
    }

    /// Adds bookmarks, optionally moving all of them into `folder` first.
    fn add_bookmarks(&mut self, bookmarks: Vec<Bookmark>, folder: Option<&str>) -> usize {
        if bookmarks.is_empty() {
            self.log.error("No bookmarks provided");
            return 0;
        }

        let total = bookmarks.len();
        let bookmarks = match folder {
            Some(folder) => bookmarks
                .into_iter()
                .map(|b| Bookmark { folder: folder.to_string(), ..b })
                .collect(),
            None => bookmarks,
        };

        let created = self.store.create_many(bookmarks);
        self.log.info(&format!("Added {} of {} bookmarks", created, total));
        created
    }

    fn update_bookmark(&mut self, id: &str, bookmark: Bookmark) -> Option<Bookmark> {
        if let Some(owner) = self.store.find_by_url(&bookmark.url) {
            if owner != id {
                self.log.warn(&format!(
                    "Bookmark {} now shares its URL with {}",
                    id, owner
                ));
            }
        }

        let updated = self.store.update(id, bookmark)?;
        self.log.debug(&format!("Updated bookmark: {}", id));
        Some(updated)
    }

    fn update_bookmarks(&mut self, bookmarks: Vec<Bookmark>) -> usize {
        if bookmarks.is_empty() {
            self.log.error("No bookmarks provided");
            return 0;
        }

        let total = bookmarks.len();
        let updated = self.store.update_many(bookmarks);
        self.log.info(&format!("Updated {} of {} bookmarks", updated, total));
        updated
    }

    fn delete_bookmark(&mut self, id: &str) -> bool {
        let deleted = self.store.delete(id);
        if !deleted {
            self.log.error(&format!("Failed to delete bookmark: {}", id));
        }
        deleted
    }

    /// Deletes the given bookmarks, identified by ID or by URL.
    fn delete_bookmarks(&mut self, bookmarks: &[Bookmark], key: DeleteKey) -> usize {
        if bookmarks.is_empty() {
            self.log.error("No bookmarks provided");
            return 0;
        }

        let ids: Vec<String> = match key {
            DeleteKey::Id => bookmarks.iter().map(|b| b.id.clone()).collect(),
            DeleteKey::Url => bookmarks
                .iter()
                .filter_map(|b| self.store.find_by_url(&b.url).map(str::to_string))
                .collect(),
        };

        let deleted = self.store.delete_many(&ids);
        self.log.info(&format!(
            "Deleted {} of {} bookmarks",
            deleted,
            bookmarks.len()
        ));
        deleted
    }

    fn search_bookmarks_by(&self, options: &SearchOptions) -> Vec<Bookmark> {
        let results = self.store.search_by(options);
        if results.is_empty() {
            self.log.info("No bookmarks found using keywords");
        } else {
            self.log.info(&format!("Found {} bookmarks using keywords", results.len()));
        }
        results
    }

    fn extract_bookmarks_by(&mut self, options: &SearchOptions) -> Vec<Bookmark> {
        let extracted = self.store.pick_by(options);
        if extracted.is_empty() {
            self.log.info("No bookmarks found using keywords");
        } else {
            self.log.info(&format!(
                "Extracted {} bookmarks using keywords",
                extracted.len()
            ));
        }
        extracted
    }

    fn order_bookmarks_by_domain(&mut self) {
        self.store.order_by_domain();
        self.log.debug("Ordered bookmarks by domain");
    }

    fn get_all_bookmarks(&self) -> Vec<Bookmark> {
        self.store.get_all()
    }
}
