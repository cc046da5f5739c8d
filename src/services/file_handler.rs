//! File access used by the bookmark façade.
//!
//! Kept behind a trait so the façade can be driven against an in-memory
//! implementation in tests.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::types::errors::BookmarkError;

/// Trait defining the byte-level file operations the façade relies on.
pub trait FileHandlerTrait: Send {
    /// Reads the whole file as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String, BookmarkError>;
    /// Writes `content`, creating parent directories as needed.
    fn write(&self, path: &Path, content: &str) -> Result<(), BookmarkError>;
    /// Removes a file or directory tree. Succeeds if the path is already gone.
    fn delete(&self, path: &Path) -> Result<(), BookmarkError>;
}

/// File handler backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileHandler;

impl FsFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandlerTrait for FsFileHandler {
    fn read(&self, path: &Path) -> Result<String, BookmarkError> {
        if !path.exists() {
            return Err(BookmarkError::FileNotFound(path.display().to_string()));
        }

        fs::read_to_string(path).map_err(|e| {
            BookmarkError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), BookmarkError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    BookmarkError::IoError(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        fs::write(path, content).map_err(|e| {
            BookmarkError::IoError(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn delete(&self, path: &Path) -> Result<(), BookmarkError> {
        let result = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BookmarkError::IoError(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
