use crate::FileWatcher;
use notify::{Event, RecursiveMode, Watcher};
use tracing::{error, info};

impl FileWatcher {
    /// Start the filesystem watcher.
    ///
    /// The notify backend lives on its own blocking thread; raw events are
    /// bridged into tokio and filtered in `deliver`. Runs until every
    /// subscriber receiver has been dropped.
    pub async fn start(self) -> anyhow::Result<()> {
        info!("👀 vigil: watching {:?}", self.root);

        let (raw_tx, mut raw_rx) = tokio::sync::mpsc::channel::<Event>(crate::CHANNEL_CAPACITY);

        let root = self.root.clone();
        std::thread::spawn(move || {
            let mut watcher =
                match notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
                    if let Ok(event) = res {
                        let _ = raw_tx.blocking_send(event);
                    }
                }) {
                    Ok(watcher) => watcher,
                    Err(e) => {
                        error!("vigil: failed to create watcher backend: {}", e);
                        return;
                    }
                };

            if let Err(e) = watcher.watch(&root, RecursiveMode::Recursive) {
                error!("vigil: failed to watch {:?}: {}", root, e);
                return;
            }

            // Keep the backend alive; dropping it would stop the stream.
            loop {
                std::thread::sleep(std::time::Duration::from_secs(60));
            }
        });

        info!("👀 vigil: ready");

        while let Some(event) = raw_rx.recv().await {
            if !self.deliver(event).await {
                break;
            }
        }

        Ok(())
    }
}
