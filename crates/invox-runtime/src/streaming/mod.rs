mod watcher;

pub use watcher::{CollectionWatcher, StoreEvent};
