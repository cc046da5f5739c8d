use serde::{Deserialize, Serialize};

/// Settings shared by the parser, serializer and file façade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SieveSettings {
    /// Label of the top-level container in the export file. Never treated as a folder.
    pub root_label: String,
    /// Directory that `save_output_bookmarks` writes into.
    pub staged_dir: String,
    /// Text of the `<TITLE>` and `<H1>` elements of rendered documents.
    pub document_title: String,
}

impl Default for SieveSettings {
    fn default() -> Self {
        Self {
            root_label: "Bookmarks".to_string(),
            staged_dir: "data/staged".to_string(),
            document_title: "Bookmarks".to_string(),
        }
    }
}
