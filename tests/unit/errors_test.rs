use bookmarksieve::types::errors::*;

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::FileNotFound("data/bookmarks.html".to_string()).to_string(),
        "File does not exist: data/bookmarks.html"
    );
    assert_eq!(
        BookmarkError::IoError("permission denied".to_string()).to_string(),
        "Bookmark I/O error: permission denied"
    );
    assert_eq!(
        BookmarkError::InvalidInput("file name cannot be empty".to_string()).to_string(),
        "Invalid bookmark input: file name cannot be empty"
    );
}

#[test]
fn bookmark_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(BookmarkError::FileNotFound("x".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("wrong type".to_string()).to_string(),
        "Invalid settings value: wrong type"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SettingsError::InvalidKey("k".to_string()));
    assert!(err.source().is_none());
}
