//! BookmarkSieve — load, search, extract and rewrite browser bookmark export files.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
