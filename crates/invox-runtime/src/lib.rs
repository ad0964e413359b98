mod client;
pub mod config;
mod error;
mod session;
mod streaming;

pub use client::{InvoiceOps, Invox, SessionOps, Subscription, WatchService};
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use session::SessionFile;
pub use streaming::{CollectionWatcher, StoreEvent};
