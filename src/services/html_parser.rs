//! Netscape bookmark file parser and serializer.
//!
//! Parsing is line oriented: each trimmed line is checked against three
//! patterns (folder heading, list close, anchor) while a stack of open folder
//! names tracks nesting. Nothing about the markup is validated; lines that do
//! not match are skipped.
//!
//! Serialization rebuilds a [`FolderTree`] from the flat folder paths and
//! renders it depth-first, bookmarks before subfolders, subfolders sorted by
//! name.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::bookmark::{Bookmark, FolderTree, FOLDER_SEPARATOR};
use crate::types::settings::SieveSettings;

static FOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<H3[^>]*>([^<]+)</H3>").expect("valid folder regex"));
static LIST_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</DL>").expect("valid list close regex"));
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<A\s+([^>]+)>([^<]+)</A>").expect("valid anchor regex"));
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bHREF="([^"]+)""#).expect("valid href regex"));
static ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bICON="([^"]+)""#).expect("valid icon regex"));
static ADD_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bADD_DATE="([^"]+)""#).expect("valid add date regex"));

const INDENT: &str = "    ";
/// Depth of the root container's contents inside the document template.
const ROOT_DEPTH: usize = 2;

/// Trait defining the bookmark document translation.
pub trait HtmlParserTrait {
    fn parse(&self, content: &str) -> Vec<Bookmark>;
    fn serialize(&self, bookmarks: &[Bookmark]) -> String;
}

/// What a single input line means to the parser.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    FolderOpen(&'a str),
    FolderClose,
    Anchor { attributes: &'a str, title: &'a str },
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(caps) = FOLDER_RE.captures(line) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            return Line::FolderOpen(name.trim());
        }
        if LIST_CLOSE_RE.is_match(line) {
            return Line::FolderClose;
        }
        if let Some(caps) = ANCHOR_RE.captures(line) {
            return Line::Anchor {
                attributes: caps.get(1).map_or("", |m| m.as_str()),
                title: caps.get(2).map_or("", |m| m.as_str()),
            };
        }
        Line::Other
    }
}

fn attribute(re: &Regex, attributes: &str) -> Option<String> {
    re.captures(attributes)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Parser/serializer for the nested `<DL>` bookmark export format.
#[derive(Debug, Clone)]
pub struct HtmlParser {
    root_label: String,
    document_title: String,
}

impl HtmlParser {
    pub fn new(settings: &SieveSettings) -> Self {
        Self {
            root_label: settings.root_label.clone(),
            document_title: settings.document_title.clone(),
        }
    }

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Fixed preamble of every rendered document, ending with the root list open.
    fn header(&self) -> String {
        format!(
            "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
             <!-- This is an automatically generated file.\n     \
             It will be read and overwritten.\n     \
             DO NOT EDIT! -->\n\
             <META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\
             <TITLE>{title}</TITLE>\n\
             <H1>{title}</H1>\n\
             <DL><p>\n\
             {INDENT}<DT><H3 PERSONAL_TOOLBAR_FOLDER=\"true\">{root}</H3>\n\
             {INDENT}<DL><p>\n",
            title = self.document_title,
            root = self.root_label,
        )
    }

    fn bookmark_from_anchor(&self, attributes: &str, title: &str, stack: &[String]) -> Option<Bookmark> {
        let url = attribute(&HREF_RE, attributes)?;
        let title = title.trim();
        if url.is_empty() || title.is_empty() {
            return None;
        }

        let folder = if stack.is_empty() {
            self.root_label.clone()
        } else {
            stack.join(FOLDER_SEPARATOR)
        };

        let mut bookmark = Bookmark::new(title, url, folder);
        bookmark.icon = attribute(&ICON_RE, attributes);
        bookmark.date_added = attribute(&ADD_DATE_RE, attributes).unwrap_or_default();
        Some(bookmark)
    }

    fn render_bookmark(out: &mut String, bookmark: &Bookmark, depth: usize) {
        out.push_str(&INDENT.repeat(depth));
        out.push_str("<DT><A HREF=\"");
        out.push_str(&bookmark.url);
        out.push('"');
        if let Some(icon) = bookmark.icon.as_deref().filter(|i| !i.is_empty()) {
            out.push_str(" ICON=\"");
            out.push_str(icon);
            out.push('"');
        }
        if !bookmark.date_added.is_empty() {
            out.push_str(" ADD_DATE=\"");
            out.push_str(&bookmark.date_added);
            out.push('"');
        }
        out.push('>');
        out.push_str(&bookmark.title);
        out.push_str("</A>\n");
    }

    fn render_node(out: &mut String, tree: &FolderTree<'_>, idx: usize, depth: usize) {
        let node = tree.node(idx);
        for bookmark in &node.bookmarks {
            Self::render_bookmark(out, bookmark, depth);
        }

        let indent = INDENT.repeat(depth);
        for (name, &child) in &node.children {
            out.push_str(&format!("{indent}<DT><H3>{name}</H3>\n"));
            out.push_str(&format!("{indent}<DL><p>\n"));
            Self::render_node(out, tree, child, depth + 1);
            out.push_str(&format!("{indent}</DL><p>\n"));
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new(&SieveSettings::default())
    }
}

impl HtmlParserTrait for HtmlParser {
    /// Parses an export document into bookmarks with fresh IDs.
    ///
    /// Bookmarks outside any folder get the root label as their folder.
    /// Anchors without `HREF` or with an empty title are skipped.
    fn parse(&self, content: &str) -> Vec<Bookmark> {
        let mut bookmarks = Vec::new();
        let mut stack: Vec<String> = Vec::new();

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match Line::classify(line) {
                Line::FolderOpen(name) => {
                    if name != self.root_label {
                        stack.push(name.to_string());
                    }
                }
                Line::FolderClose => {
                    stack.pop();
                }
                Line::Anchor { attributes, title } => {
                    if let Some(bookmark) = self.bookmark_from_anchor(attributes, title, &stack) {
                        bookmarks.push(bookmark);
                    }
                }
                Line::Other => {}
            }
        }

        bookmarks
    }

    /// Renders bookmarks as a complete export document.
    ///
    /// Titles, URLs and attribute values are written verbatim.
    fn serialize(&self, bookmarks: &[Bookmark]) -> String {
        let tree = FolderTree::build(bookmarks, &self.root_label);

        let mut out = self.header();
        Self::render_node(&mut out, &tree, FolderTree::ROOT, ROOT_DEPTH);
        out.push_str(INDENT);
        out.push_str("</DL><p>\n");
        out.push_str("</DL><p>\n");
        out
    }
}
