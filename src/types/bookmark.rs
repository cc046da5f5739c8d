use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between segments of a folder path, e.g. `"Work > Tools"`.
pub const FOLDER_SEPARATOR: &str = " > ";

/// Represents a saved bookmark.
///
/// `folder` is a flat `" > "`-joined path; folders are never stored on their own.
/// `date_added` and `icon` keep whatever the export file carried, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Bookmark {
    /// Creates a bookmark with a freshly generated ID and no icon or date.
    pub fn new(title: impl Into<String>, url: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            url: url.into(),
            folder: folder.into(),
            date_added: String::new(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_date_added(mut self, date_added: impl Into<String>) -> Self {
        self.date_added = date_added.into();
        self
    }

    /// Splits the folder path into its segments. Empty for the implicit root.
    pub fn folder_segments(&self) -> Vec<&str> {
        if self.folder.is_empty() {
            return Vec::new();
        }
        self.folder.split(FOLDER_SEPARATOR).collect()
    }
}

/// One folder of the tree rebuilt while serializing.
///
/// Children are addressed by index into the owning [`FolderTree`] and kept in
/// a `BTreeMap` so iteration is always in lexicographic name order.
#[derive(Debug)]
pub struct FolderNode<'a> {
    pub name: String,
    pub bookmarks: Vec<&'a Bookmark>,
    pub children: BTreeMap<String, usize>,
    pub parent: Option<usize>,
}

impl<'a> FolderNode<'a> {
    fn new(name: &str, parent: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            bookmarks: Vec::new(),
            children: BTreeMap::new(),
            parent,
        }
    }
}

/// Arena of folder nodes derived from a bookmark slice. Index 0 is the root.
#[derive(Debug)]
pub struct FolderTree<'a> {
    nodes: Vec<FolderNode<'a>>,
}

impl<'a> FolderTree<'a> {
    pub const ROOT: usize = 0;

    /// Builds the tree from each bookmark's folder path.
    ///
    /// An empty folder, or one equal to `root_label`, places the bookmark
    /// directly on the root node.
    pub fn build(bookmarks: &'a [Bookmark], root_label: &str) -> Self {
        let mut tree = Self {
            nodes: vec![FolderNode::new(root_label, None)],
        };

        for bookmark in bookmarks {
            if bookmark.folder.is_empty() || bookmark.folder == root_label {
                tree.nodes[Self::ROOT].bookmarks.push(bookmark);
                continue;
            }

            let mut current = Self::ROOT;
            for segment in bookmark.folder_segments() {
                current = tree.child_or_insert(current, segment);
            }
            tree.nodes[current].bookmarks.push(bookmark);
        }

        tree
    }

    fn child_or_insert(&mut self, parent: usize, name: &str) -> usize {
        if let Some(&idx) = self.nodes[parent].children.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(FolderNode::new(name, Some(parent)));
        self.nodes[parent].children.insert(name.to_string(), idx);
        idx
    }

    pub fn node(&self, idx: usize) -> &FolderNode<'a> {
        &self.nodes[idx]
    }

    pub fn root(&self) -> &FolderNode<'a> {
        self.node(Self::ROOT)
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstructs the `" > "` path of a node by walking parent links.
    pub fn path_of(&self, idx: usize) -> String {
        let mut segments = Vec::new();
        let mut current = idx;
        while let Some(parent) = self.nodes[current].parent {
            segments.push(self.nodes[current].name.as_str());
            current = parent;
        }
        segments.reverse();
        segments.join(FOLDER_SEPARATOR)
    }
}
