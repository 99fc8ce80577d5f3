//! The ignore set currently consulted on the event-delivery path.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::set::IgnoreSet;

/// Owned, atomically swappable handle to the active [`IgnoreSet`].
///
/// Clones share one slot, so the watch side and the side installing rules
/// can each hold a handle. An installed set is treated as read-only; the
/// only mutations are [`install`](Self::install) and [`clear`](Self::clear),
/// which replace the whole reference. Readers take a cheap snapshot per
/// event and never observe a partially updated pattern sequence.
#[derive(Debug, Clone, Default)]
pub struct ActiveIgnore {
    inner: Arc<RwLock<Option<Arc<IgnoreSet>>>>,
}

impl ActiveIgnore {
    /// A handle with no set installed: filtering disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a set, replacing any previous one. The old reference simply
    /// becomes unreachable once in-flight readers drop their snapshots.
    pub fn install(&self, set: Arc<IgnoreSet>) {
        info!(patterns = set.patterns().len(), "🔎 ignore set installed");
        *self.inner.write() = Some(set);
    }

    /// Remove the installed set, disabling filtering.
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    /// Snapshot of the currently installed set, if any.
    pub fn current(&self) -> Option<Arc<IgnoreSet>> {
        self.inner.read().clone()
    }

    /// Convenience for the delivery path: `false` when nothing is installed.
    pub fn should_ignore(&self, path: &Path, dir_hint: Option<bool>) -> bool {
        match self.current() {
            Some(set) => set.should_ignore_with_hint(path, dir_hint),
            None => false,
        }
    }
}
