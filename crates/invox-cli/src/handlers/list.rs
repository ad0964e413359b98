use crate::args::OutputFormat;
use crate::commands::resolve_owner;
use crate::presentation::renderers::console;
use anyhow::Result;
use invox_runtime::Invox;
use is_terminal::IsTerminal;

pub fn handle(
    invox: &Invox,
    user: Option<String>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let owner = resolve_owner(invox, user)?;

    let mut invoices = invox.invoices().list(&owner)?;
    invoices.truncate(limit);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&invoices)?);
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();
    console::print_invoices(
        &invoices,
        &invox.config().currency_table(),
        &invox.config().origin,
        color,
    );

    Ok(())
}
