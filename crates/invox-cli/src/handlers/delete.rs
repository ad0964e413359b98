use anyhow::Result;
use invox_runtime::Invox;
use std::io::Write;

pub fn handle(invox: &Invox, invoice_id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(invoice_id)? {
        println!("Cancelled");
        return Ok(());
    }

    invox.invoices().delete(invoice_id)?;
    println!("Deleted invoice {}", invoice_id);
    Ok(())
}

fn confirm(invoice_id: &str) -> Result<bool> {
    print!("Delete invoice {}? [y/N] ", invoice_id);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
