use crate::args::OutputFormat;
use crate::presentation::renderers::console;
use anyhow::Result;
use invox_runtime::Invox;

pub fn handle(invox: &Invox, invoice_id: &str, format: OutputFormat) -> Result<()> {
    let invoice = invox
        .invoices()
        .get(invoice_id)?
        .ok_or_else(|| anyhow::anyhow!("Invoice not found: {}", invoice_id))?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&invoice)?);
        return Ok(());
    }

    console::print_invoice_detail(
        &invoice,
        &invox.config().currency_table(),
        &invox.config().origin,
    );
    Ok(())
}
