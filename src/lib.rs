//! QuickUrl: a menu-bar quick launcher for a curated list of URLs.
//!
//! This library crate holds the list core (entry model, storage, file access
//! broker, list manager) used by the binaries and integration tests. The
//! menu-bar UI itself lives out of process and talks to `quickurl-rpc`.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
