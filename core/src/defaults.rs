//! Built-in noise patterns seeded into sets on request.

use crate::set::IgnoreSet;
use std::path::PathBuf;

/// Noise every subscriber wants suppressed out of the box: version-control
/// internals, dependency trees, editor droppings and the ignore files
/// themselves.
pub const DEFAULT_PATTERNS: &[&str] = &[
    ".git/",
    ".svn/",
    ".hg/",
    ".bzr/",
    "node_modules/",
    "vendor/",
    "*.swp",
    "*.swo",
    "*~",
    ".DS_Store",
    "Thumbs.db",
    "__pycache__/",
    "*.pyc",
    ".idea/",
    ".vscode/",
    "*.log",
    ".notifyignore",
    ".gitignore",
];

/// The default pattern list as owned lines, in order.
pub fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect()
}

impl IgnoreSet {
    /// A set pre-seeded with [`DEFAULT_PATTERNS`] through the ordinary
    /// `add_pattern` path; no special-cased matching.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::compile(root, DEFAULT_PATTERNS.iter().copied())
    }
}
