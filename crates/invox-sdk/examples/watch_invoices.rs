//! Watch one owner's invoices and print each snapshot as it arrives.
//!
//! Usage: cargo run --example watch_invoices -- <owner>

use futures::stream::StreamExt;
use invox_sdk::{Client, StoreEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let owner = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-user".to_string());

    let client = Client::connect_default()?;
    let mut stream = client.watch(&owner).start()?;

    println!("Watching invoices for {} (ctrl-c to stop)", owner);

    while let Some(event) = stream.next().await {
        match event {
            StoreEvent::Snapshot(invoices) => {
                println!("-- snapshot: {} invoices --", invoices.len());
                for invoice in &invoices {
                    println!(
                        "  {}  {}  {}",
                        invoice.id,
                        invoice.project_title.as_deref().unwrap_or("Untitled Project"),
                        invoice.payment_status.as_str(),
                    );
                }
            }
            StoreEvent::Error(msg) => eprintln!("watch error: {}", msg),
        }
    }

    Ok(())
}
