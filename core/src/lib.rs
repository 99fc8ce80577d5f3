//! Vigil Core
//!
//! Gitignore-style ignore engine for the vigil watcher: pattern
//! compilation, hierarchical glob matching and the active-set handle
//! consulted on the event-delivery path.

pub mod active;
pub mod config;
pub mod defaults;
pub mod matcher;
pub mod paths;
pub mod pattern;
pub mod set;

pub use active::ActiveIgnore;
pub use defaults::{DEFAULT_PATTERNS, default_patterns};
pub use pattern::Pattern;
pub use set::{IgnoreError, IgnoreSet};

use tracing::info;

pub fn init() {
    info!("🔎 Vigil Core Initialized");
}
