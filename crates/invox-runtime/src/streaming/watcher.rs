use crate::Result;
use invox_store::InvoiceStore;
use invox_types::Invoice;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

/// Events delivered by a live collection subscription.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// Full query result for the subscribed owner. Each snapshot fully
    /// supersedes the previous one; consumers replace, never merge.
    Snapshot(Vec<Invoice>),
    Error(String),
}

/// Watches a store root and turns filesystem changes into full snapshots
/// of one owner's invoices.
///
/// An initial snapshot is emitted on attach, then one per observed change.
/// Dropping the watcher stops the underlying poll watcher; no snapshot is
/// delivered after that.
pub struct CollectionWatcher {
    _watcher: PollWatcher,
    rx: Receiver<StoreEvent>,
}

impl CollectionWatcher {
    pub fn new(store_root: &Path, owner: String, poll_interval: Duration) -> Result<Self> {
        let store = InvoiceStore::open(store_root)?;

        let (tx_out, rx_out) = channel();
        let (tx_fs, rx_fs) = channel();

        let config = notify::Config::default().with_poll_interval(poll_interval);

        let mut watcher = PollWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = tx_fs.send(event);
                }
            },
            config,
        )
        .map_err(|e| crate::Error::Config(format!("failed to start watcher: {}", e)))?;

        watcher
            .watch(store_root, RecursiveMode::Recursive)
            .map_err(|e| crate::Error::Config(format!("failed to watch store root: {}", e)))?;

        send_snapshot(&store, &owner, &tx_out);

        let tx_worker = tx_out.clone();
        std::thread::Builder::new()
            .name("invox-collection-watcher".to_string())
            .spawn(move || {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    while let Ok(event) = rx_fs.recv() {
                        if !is_document_event(&event) {
                            continue;
                        }
                        // Drain whatever else the poll cycle produced so a
                        // burst of writes yields one snapshot, not many.
                        while let Ok(_extra) = rx_fs.try_recv() {}

                        send_snapshot(&store, &owner, &tx_worker);
                    }
                }));

                if let Err(panic_err) = result {
                    let panic_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_err.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Worker thread panicked with unknown error".to_string()
                    };
                    let _ = tx_worker.send(StoreEvent::Error(format!(
                        "FATAL: Worker thread panicked: {}",
                        panic_msg
                    )));
                }
            })?;

        Ok(Self {
            _watcher: watcher,
            rx: rx_out,
        })
    }

    pub fn receiver(&self) -> &Receiver<StoreEvent> {
        &self.rx
    }
}

fn is_document_event(event: &Event) -> bool {
    let touches_document = event
        .paths
        .iter()
        .any(|p| p.extension().and_then(|e| e.to_str()) == Some("json"));

    touches_document
        && matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        )
}

fn send_snapshot(store: &InvoiceStore, owner: &str, tx: &Sender<StoreEvent>) {
    match store.query(owner) {
        Ok(invoices) => {
            let _ = tx.send(StoreEvent::Snapshot(invoices));
        }
        Err(e) => {
            let _ = tx.send(StoreEvent::Error(format!("snapshot query failed: {}", e)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invox_types::InvoiceDraft;
    use tempfile::TempDir;

    const TEST_POLL: Duration = Duration::from_millis(100);
    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    fn draft(owner: &str) -> InvoiceDraft {
        InvoiceDraft::for_owner(owner)
    }

    fn next_snapshot(watcher: &CollectionWatcher) -> Vec<Invoice> {
        match watcher.receiver().recv_timeout(RECV_TIMEOUT) {
            Ok(StoreEvent::Snapshot(invoices)) => invoices,
            Ok(StoreEvent::Error(msg)) => panic!("watcher error: {}", msg),
            Err(e) => panic!("no snapshot within timeout: {}", e),
        }
    }

    #[test]
    fn emits_initial_snapshot_on_attach() {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path()).unwrap();
        store.create(draft("user-1")).unwrap();

        let watcher =
            CollectionWatcher::new(temp.path(), "user-1".to_string(), TEST_POLL).unwrap();

        let snapshot = next_snapshot(&watcher);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn change_produces_superseding_snapshot() {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path()).unwrap();

        let watcher =
            CollectionWatcher::new(temp.path(), "user-1".to_string(), TEST_POLL).unwrap();
        assert!(next_snapshot(&watcher).is_empty());

        let created = store.create(draft("user-1")).unwrap();

        // Later snapshots may coalesce several poll cycles; wait until the
        // record shows up.
        let deadline = std::time::Instant::now() + RECV_TIMEOUT;
        loop {
            let snapshot = next_snapshot(&watcher);
            if snapshot.iter().any(|i| i.id == created.id) {
                break;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "record never appeared in a snapshot"
            );
        }
    }

    #[test]
    fn dropping_the_watcher_ends_the_stream() {
        let temp = TempDir::new().unwrap();

        let watcher =
            CollectionWatcher::new(temp.path(), "user-1".to_string(), TEST_POLL).unwrap();
        let _ = next_snapshot(&watcher);

        let rx = watcher.rx;
        drop(watcher._watcher);

        // Once the watcher is gone the fs channel closes, the worker exits,
        // and the event stream disconnects.
        loop {
            match rx.recv_timeout(RECV_TIMEOUT) {
                Ok(_) => continue,
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
                Err(e) => panic!("stream did not disconnect: {}", e),
            }
        }
    }
}
