//! BookmarkSieve — load, search, extract and rewrite browser bookmark export files.
//!
//! Entry point: with a path argument, loads that export and prints a summary of
//! its folders. Without arguments, runs an interactive console demo over a
//! built-in sample document.

use std::collections::BTreeMap;
use std::process::ExitCode;

use bookmarksieve::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use bookmarksieve::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use bookmarksieve::services::html_parser::{HtmlParser, HtmlParserTrait};
use bookmarksieve::types::search::{SearchField, SearchOptions};
use bookmarksieve::types::settings::SieveSettings;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 PERSONAL_TOOLBAR_FOLDER="true">Bookmarks</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1700000000">Rust Programming Language</A>
        <DT><H3>Work</H3>
        <DL><p>
            <DT><A HREF="https://docs.rs/" ADD_DATE="1700000100">Docs.rs</A>
            <DT><H3>Tools</H3>
            <DL><p>
                <DT><A HREF="https://crates.io/" ICON="data:image/png;base64,AAAA">crates.io</A>
                <DT><A HREF="https://github.com/rust-lang/rust">rust-lang/rust on GitHub</A>
            </DL><p>
        </DL><p>
        <DT><H3>News</H3>
        <DL><p>
            <DT><A HREF="https://news.ycombinator.com/">Hacker News</A>
            <DT><A HREF="https://this-week-in-rust.org/">This Week in Rust</A>
        </DL><p>
    </DL><p>
</DL><p>
"#;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn summarize(path: &str) -> ExitCode {
    let manager = match BookmarkManager::open(path, SieveSettings::default()) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut per_folder: BTreeMap<String, usize> = BTreeMap::new();
    for bookmark in manager.get_all_bookmarks() {
        *per_folder.entry(bookmark.folder).or_default() += 1;
    }

    section(&format!("{} ({} bookmarks)", path, manager.store().len()));
    for (folder, count) in per_folder {
        println!("  {:>5}  {}", count, folder);
    }
    ExitCode::SUCCESS
}

fn demo() -> ExitCode {
    let parser = HtmlParser::default();

    section("Parser");
    let parsed = parser.parse(SAMPLE);
    for bookmark in &parsed {
        println!("  [{}] {} <{}>", bookmark.folder, bookmark.title, bookmark.url);
    }
    println!();

    section("Store");
    let mut store = BookmarkStore::new();
    let created = store.create_many(parsed.clone());
    let duplicates = store.create_many(parsed);
    println!("  Created {} bookmarks, {} duplicates accepted", created, duplicates);

    let rust = SearchOptions::including(["rust"]);
    println!("  Search \"rust\": {} matches", store.search_by(&rust).len());

    let rust_not_github = SearchOptions::including(["rust"]).excluding(["github"]);
    println!(
        "  Search \"rust\" excluding \"github\": {} matches",
        store.search_by(&rust_not_github).len()
    );

    let work = SearchOptions::including(["work"]).search_in(&[SearchField::Folder]);
    let extracted = store.pick_by(&work);
    println!("  Extracted {} bookmarks from Work, {} left", extracted.len(), store.len());
    println!();

    section("Serializer (extracted)");
    print!("{}", parser.serialize(&extracted));
    println!();

    store.order_by_domain();
    section("Serializer (remaining, ordered by domain)");
    print!("{}", parser.serialize(&store.get_all()));

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    init_tracing();

    match std::env::args().nth(1) {
        Some(path) => summarize(&path),
        None => demo(),
    }
}
