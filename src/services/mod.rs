// BookmarkSieve services
// Services are stateless per call: document parsing, file access, logging and settings.

pub mod event_log;
pub mod file_handler;
pub mod html_parser;
pub mod settings_engine;
