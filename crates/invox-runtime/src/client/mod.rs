mod invoices;
mod sessions;
mod watch_service;
mod workspace;

pub use invoices::InvoiceOps;
pub use sessions::SessionOps;
pub use watch_service::{Subscription, WatchService};
pub use workspace::Invox;
