use anyhow::Result;
use invox_runtime::Invox;
use invox_types::share_link;

pub fn handle(invox: &Invox, invoice_id: &str) -> Result<()> {
    let invoice = invox
        .invoices()
        .get(invoice_id)?
        .ok_or_else(|| anyhow::anyhow!("Invoice not found: {}", invoice_id))?;

    println!("{}", share_link(&invox.config().origin, &invoice.id));
    Ok(())
}
