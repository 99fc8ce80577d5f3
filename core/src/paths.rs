//! Path helpers for configured watch roots.
//!
//! Handles tilde expansion so roots like `~/projects` work from config
//! files and environment variables.

use std::path::PathBuf;

/// Expands a leading tilde to the user's home directory.
/// `/tmp/foo` and other absolute paths pass through unchanged.
pub fn expand_tilde(path: &str) -> String {
    let home = || std::env::var("HOME").unwrap_or_else(|_| ".".to_string());

    match path {
        "~" => home(),
        p => match p.strip_prefix("~/") {
            Some(rest) => format!("{}/{}", home(), rest),
            None => p.to_string(),
        },
    }
}

/// Convert a possibly tilde-prefixed string into a `PathBuf`.
pub fn get_path(path: &str) -> PathBuf {
    PathBuf::from(expand_tilde(path))
}
