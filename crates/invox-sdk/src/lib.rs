//! invox-sdk: embed the invox invoice store in your own tools.
//!
//! # Overview
//!
//! `invox-sdk` is a thin async facade over the invox runtime. It exposes the
//! essential primitives (listing, creating, and deleting invoices, plus live
//! snapshots of one owner's collection) without the CLI's presentation
//! machinery.
//!
//! # Quickstart
//!
//! ```no_run
//! use invox_sdk::Client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! let invoices = client.list("user-1").await?;
//! println!("{} invoices", invoices.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Real-time monitoring
//!
//! ```no_run
//! use invox_sdk::{Client, StoreEvent};
//! use futures::stream::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! let mut stream = client.watch("user-1").start()?;
//! while let Some(event) = stream.next().await {
//!     if let StoreEvent::Snapshot(invoices) = event {
//!         println!("now holding {} invoices", invoices.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod watch;

pub use client::Client;
pub use error::{Error, Result};
pub use invox_runtime::StoreEvent;
pub use invox_types::{Invoice, InvoiceDraft};
pub use watch::{LiveStream, WatchBuilder};
