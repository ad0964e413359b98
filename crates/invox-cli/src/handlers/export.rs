use crate::commands::resolve_owner;
use anyhow::{Context, Result};
use invox_runtime::Invox;
use invox_types::Invoice;
use std::path::PathBuf;

pub fn handle(invox: &Invox, user: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let owner = resolve_owner(invox, user)?;
    let invoices = invox.invoices().list(&owner)?;

    match output {
        Some(path) => {
            let writer = csv::Writer::from_path(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            write_rows(writer, &invoices)?;
            println!("Exported {} invoices to {}", invoices.len(), path.display());
        }
        None => {
            write_rows(csv::Writer::from_writer(std::io::stdout()), &invoices)?;
        }
    }

    Ok(())
}

fn write_rows<W: std::io::Write>(mut writer: csv::Writer<W>, invoices: &[Invoice]) -> Result<()> {
    writer.write_record([
        "id",
        "createdBy",
        "projectTitle",
        "clientName",
        "paymentStatus",
        "totalPayment",
        "currency",
        "createdAt",
        "updatedAt",
    ])?;

    for invoice in invoices {
        writer.write_record([
            invoice.id.as_str(),
            invoice.created_by.as_str(),
            invoice.project_title.as_deref().unwrap_or(""),
            invoice.client_name.as_deref().unwrap_or(""),
            invoice.payment_status.as_str(),
            &invoice.total_payment.to_string(),
            invoice.currency.as_deref().unwrap_or(""),
            &invoice
                .created_time()
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default(),
            &invoice
                .updated_time()
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
