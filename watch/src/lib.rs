//! Vigil Watch
//!
//! Recursive filesystem observation with ignore filtering on the delivery
//! path: raw notify events are tested against the active ignore set and
//! suppressed before they ever reach the subscriber channel.

mod deliver;
pub mod types;
mod watcher;

pub use types::{EventKind, WatchEvent};

use std::path::PathBuf;
use tokio::sync::mpsc;
use vigil_core::ActiveIgnore;

/// Capacity of the subscriber channel and the raw notify bridge.
const CHANNEL_CAPACITY: usize = 100;

/// Recursive watcher for one root directory.
///
/// Holds a clone of the [`ActiveIgnore`] handle; whoever owns the other
/// clone can install a replacement set at any time without touching the
/// running watcher.
pub struct FileWatcher {
    root: PathBuf,
    ignore: ActiveIgnore,
    tx: mpsc::Sender<WatchEvent>,
}

impl FileWatcher {
    /// Create a watcher for `root`. Events that survive the ignore filter
    /// arrive on the returned receiver, which is the consumer-facing
    /// stream.
    pub fn new(
        root: impl Into<PathBuf>,
        ignore: ActiveIgnore,
    ) -> (Self, mpsc::Receiver<WatchEvent>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (
            Self {
                root: root.into(),
                ignore,
                tx,
            },
            rx,
        )
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}
