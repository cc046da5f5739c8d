//! App Core for BookmarkSieve.
//!
//! Holds the settings engine and the bookmark file currently open, if any.

use crate::managers::bookmark_manager::BookmarkManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SettingsError;

/// Central application state shared by the RPC handler.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub manager: Option<BookmarkManager>,
}

impl App {
    /// Creates a new App, loading settings from `config_path` (or the default file).
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;

        Ok(Self {
            settings_engine,
            manager: None,
        })
    }

    /// Opens `path` as the active bookmark file, replacing any previous one.
    ///
    /// Returns the number of bookmarks loaded.
    pub fn open(&mut self, path: &str) -> Result<usize, Box<dyn std::error::Error>> {
        let settings = self.settings_engine.get_settings().clone();
        let manager = BookmarkManager::open(path, settings)?;
        let count = manager.store().len();
        self.manager = Some(manager);
        Ok(count)
    }

    /// Changes one setting, persists it and hands the result to the open file.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        if let Some(manager) = self.manager.as_mut() {
            manager.apply_settings(self.settings_engine.get_settings().clone());
        }
        Ok(())
    }
}
