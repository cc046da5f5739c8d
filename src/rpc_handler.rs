//! RPC method handler for the BookmarkSieve JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! active `BookmarkManager` and the settings engine via the `App` struct.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait, DeleteKey};
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::Bookmark;
use crate::types::search::SearchOptions;

use serde_json::{json, Value};

/// Builds a bookmark from request params. `title` and `url` are required;
/// a missing `id` gets a fresh one.
pub fn bookmark_from_params(params: &Value) -> Result<Bookmark, String> {
    let title = params.get("title").and_then(|v| v.as_str()).ok_or("missing title")?;
    let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
    if title.trim().is_empty() || url.trim().is_empty() {
        return Err("title and url must not be empty".to_string());
    }
    let folder = params.get("folder").and_then(|v| v.as_str()).unwrap_or("");

    let mut bookmark = Bookmark::new(title, url, folder);
    if let Some(id) = params.get("id").and_then(|v| v.as_str()) {
        bookmark.id = id.to_string();
    }
    if let Some(icon) = params.get("icon").and_then(|v| v.as_str()) {
        bookmark.icon = Some(icon.to_string());
    }
    if let Some(date) = params.get("dateAdded").and_then(|v| v.as_str()) {
        bookmark.date_added = date.to_string();
    }
    Ok(bookmark)
}

fn bookmarks_from_params(params: &Value) -> Result<Vec<Bookmark>, String> {
    params
        .get("bookmarks")
        .and_then(|v| v.as_array())
        .ok_or("missing bookmarks")?
        .iter()
        .map(bookmark_from_params)
        .collect()
}

fn search_options(params: &Value) -> Result<SearchOptions, String> {
    let raw = params.get("options").cloned().unwrap_or_else(|| params.clone());
    serde_json::from_value(raw).map_err(|e| format!("invalid search options: {}", e))
}

fn active(app: &mut App) -> Result<&mut BookmarkManager, String> {
    app.manager.as_mut().ok_or_else(|| "no bookmark file loaded".to_string())
}

fn to_json(bookmarks: &[Bookmark]) -> Result<Value, String> {
    serde_json::to_value(bookmarks).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Files ───
        "bookmarks.load" => {
            let path = params.get("path").and_then(|v| v.as_str()).ok_or("missing path")?;
            let total = a.open(path).map_err(|e| e.to_string())?;
            Ok(json!({"path": path, "total": total}))
        }
        "bookmarks.save" => {
            let saved = active(&mut a)?.save_bookmarks().map_err(|e| e.to_string())?;
            Ok(json!({"saved": saved}))
        }
        "bookmarks.saveOutput" => {
            let file_name = params.get("fileName").and_then(|v| v.as_str()).ok_or("missing fileName")?;
            let bookmarks = bookmarks_from_params(params)?;
            let target = active(&mut a)?
                .save_output_bookmarks(&bookmarks, file_name)
                .map_err(|e| e.to_string())?;
            Ok(json!({"path": target.to_string_lossy(), "saved": bookmarks.len()}))
        }
        "bookmarks.deleteFile" => {
            active(&mut a)?.delete_file().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let bookmark = bookmark_from_params(params)?;
            let created = active(&mut a)?.add_bookmark(bookmark);
            serde_json::to_value(created).map_err(|e| e.to_string())
        }
        "bookmark.addMany" => {
            let bookmarks = bookmarks_from_params(params)?;
            let folder = params.get("folder").and_then(|v| v.as_str());
            let added = active(&mut a)?.add_bookmarks(bookmarks, folder);
            Ok(json!({"added": added}))
        }
        "bookmark.update" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let bookmark = bookmark_from_params(params)?;
            let updated = active(&mut a)?.update_bookmark(id, bookmark);
            serde_json::to_value(updated).map_err(|e| e.to_string())
        }
        "bookmark.delete" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let deleted = active(&mut a)?.delete_bookmark(id);
            Ok(json!({"ok": deleted}))
        }
        "bookmark.deleteMany" => {
            let bookmarks = bookmarks_from_params(params)?;
            let key = match params.get("key").and_then(|v| v.as_str()).unwrap_or("id") {
                "id" => DeleteKey::Id,
                "url" => DeleteKey::Url,
                other => return Err(format!("invalid key: {}", other)),
            };
            let deleted = active(&mut a)?.delete_bookmarks(&bookmarks, key);
            Ok(json!({"deleted": deleted}))
        }
        "bookmark.get" => {
            let mgr = active(&mut a)?;
            let store = mgr.store();
            let id = match (
                params.get("id").and_then(|v| v.as_str()),
                params.get("url").and_then(|v| v.as_str()),
            ) {
                (Some(id), _) => Some(id),
                (None, Some(url)) => store.find_by_url(url),
                (None, None) => return Err("missing id or url".to_string()),
            };
            let found = id.and_then(|id| store.find_by_id(id));
            serde_json::to_value(found).map_err(|e| e.to_string())
        }
        "bookmark.list" => {
            let bookmarks = active(&mut a)?.get_all_bookmarks();
            Ok(json!({"items": to_json(&bookmarks)?, "total": bookmarks.len()}))
        }
        "bookmark.search" => {
            let options = search_options(params)?;
            let results = active(&mut a)?.search_bookmarks_by(&options);
            to_json(&results)
        }
        "bookmark.extract" => {
            let options = search_options(params)?;
            let extracted = active(&mut a)?.extract_bookmarks_by(&options);
            to_json(&extracted)
        }
        "bookmark.orderByDomain" => {
            active(&mut a)?.order_bookmarks_by_domain();
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
