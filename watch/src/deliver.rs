use crate::{types, FileWatcher, WatchEvent};
use notify::Event;
use tracing::trace;

impl FileWatcher {
    /// Filter one raw notify event and forward the survivors.
    ///
    /// The active ignore set is read once per raw event; suppressed paths
    /// are dropped right here, before the subscriber channel — not queued
    /// and not counted against its capacity. Returns `false` once every
    /// subscriber is gone.
    pub(crate) async fn deliver(&self, event: Event) -> bool {
        let kind = match types::categorize(&event.kind) {
            Some(kind) => kind,
            None => return true,
        };
        let hint = types::dir_hint(&event.kind);
        let set = self.ignore.current();

        for path in event.paths {
            if let Some(set) = &set {
                if set.should_ignore_with_hint(&path, hint) {
                    trace!("👀 vigil: suppressed {:?}", path);
                    continue;
                }
            }
            if self.tx.send(WatchEvent { kind, path }).await.is_err() {
                return false;
            }
        }
        true
    }
}
