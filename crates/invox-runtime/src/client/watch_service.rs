use crate::streaming::{CollectionWatcher, StoreEvent};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Opens live subscriptions over the store root.
#[derive(Clone)]
pub struct WatchService {
    store_root: PathBuf,
}

impl WatchService {
    pub fn new(store_root: PathBuf) -> Self {
        Self { store_root }
    }

    /// Subscribe to one owner's invoices. The subscription emits an initial
    /// snapshot immediately and a superseding snapshot after every change.
    pub fn subscribe(&self, owner: &str) -> Result<Subscription> {
        let watcher = CollectionWatcher::new(&self.store_root, owner.to_string(), POLL_INTERVAL)?;
        Ok(Subscription {
            owner: owner.to_string(),
            watcher,
        })
    }
}

/// A live, cancellable snapshot stream for one owner.
///
/// Dropping the subscription cancels the watch; no snapshot callback can
/// fire after that, which is what makes identity switching safe: drop the
/// old subscription first, then open the new one.
pub struct Subscription {
    owner: String,
    watcher: CollectionWatcher,
}

impl Subscription {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn receiver(&self) -> &Receiver<StoreEvent> {
        self.watcher.receiver()
    }
}
