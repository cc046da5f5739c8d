use std::fmt;

// === BookmarkError ===

/// Errors raised while moving bookmark documents in and out of storage.
///
/// The in-memory store and the parser never produce these; unknown IDs and
/// malformed lines are reported through return values instead.
#[derive(Debug)]
pub enum BookmarkError {
    /// The bookmark file does not exist.
    FileNotFound(String),
    /// Reading, writing or deleting a file failed.
    IoError(String),
    /// A caller passed input that cannot be acted on.
    InvalidInput(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::FileNotFound(path) => write!(f, "File does not exist: {}", path),
            BookmarkError::IoError(msg) => write!(f, "Bookmark I/O error: {}", msg),
            BookmarkError::InvalidInput(msg) => write!(f, "Invalid bookmark input: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
