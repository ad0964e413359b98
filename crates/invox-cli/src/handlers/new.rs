use crate::commands::resolve_owner;
use anyhow::Result;
use invox_runtime::Invox;
use invox_types::{InvoiceDraft, share_link};

pub fn handle(
    invox: &Invox,
    user: Option<String>,
    project: Option<String>,
    client: Option<String>,
    total: f64,
    currency: Option<String>,
) -> Result<()> {
    let owner = resolve_owner(invox, user)?;

    let invoice = invox.invoices().create(InvoiceDraft {
        created_by: owner,
        project_title: project,
        client_name: client,
        total_payment: total,
        currency,
    })?;

    println!("Created invoice {}", invoice.id);
    println!("{}", share_link(&invox.config().origin, &invoice.id));
    Ok(())
}
