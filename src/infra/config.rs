//! Centralized configuration (environment variables + defaults).
//!
//! `main` calls `dotenv::dotenv()` first, so a `.env` file in the working
//! directory can set any of these.

use std::path::PathBuf;

pub const DEFAULT_CONTACTS_PATH: &str = "./data/contacts.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "public";

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// JSON file holding the contact array. Created as `[]` if absent.
pub fn contacts_path() -> PathBuf {
    PathBuf::from(var_or("CONTACTS_PATH", DEFAULT_CONTACTS_PATH))
}

/// Socket address the HTTP server listens on.
pub fn bind_addr() -> String {
    var_or("BIND_ADDR", DEFAULT_BIND_ADDR)
}

/// Directory served for paths no route matches (stylesheets, images).
pub fn static_dir() -> PathBuf {
    PathBuf::from(var_or("STATIC_DIR", DEFAULT_STATIC_DIR))
}
