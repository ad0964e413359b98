use anyhow::Result;
use invox_runtime::Invox;

pub fn handle(invox: &Invox, invoice_id: &str) -> Result<()> {
    let invoice = invox.invoices().mark_paid(invoice_id)?;
    println!("Marked invoice {} as paid", invoice.id);
    Ok(())
}
