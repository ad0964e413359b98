use crate::presentation::formatters::{money, time};
use invox_types::{CurrencyTable, Invoice, share_link, truncate};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Terminal width below which the share-link column is dropped.
const LINK_COLUMN_MIN_WIDTH: u16 = 120;

pub(crate) fn print_invoices(
    invoices: &[Invoice],
    currency: &CurrencyTable,
    origin: &str,
    color: bool,
) {
    if invoices.is_empty() {
        println!("No invoices.");
        return;
    }

    let show_link = terminal_size()
        .map(|(Width(w), _)| w >= LINK_COLUMN_MIN_WIDTH)
        .unwrap_or(false);

    let mut header = format!(
        "{:<14} {:<10} {:<24} {:<18} {:<8} {:>14}",
        "CREATED", "ID", "PROJECT", "CLIENT", "STATUS", "AMOUNT"
    );
    if show_link {
        header.push_str("  LINK");
    }
    if color {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }

    for invoice in invoices {
        let created = time::format_relative_time(invoice.created_time());
        let id_short = if invoice.id.len() > 8 {
            &invoice.id[..8]
        } else {
            &invoice.id
        };
        let project = truncate(
            invoice.project_title.as_deref().unwrap_or("Untitled Project"),
            24,
        );
        let client = truncate(
            invoice.client_name.as_deref().unwrap_or("Not specified"),
            18,
        );
        let symbol = currency.symbol_for(invoice.currency.as_deref());
        let amount = money::format_money(invoice.total_payment, symbol);

        let status_cell = format!("{:<8}", invoice.payment_status.badge());
        let status_cell = if color {
            if invoice.payment_status.is_paid() {
                status_cell.green().to_string()
            } else {
                status_cell.yellow().to_string()
            }
        } else {
            status_cell
        };

        let mut row = format!(
            "{:<14} {:<10} {:<24} {:<18} {} {:>14}",
            created, id_short, project, client, status_cell, amount
        );
        if show_link {
            row.push_str("  ");
            row.push_str(&share_link(origin, &invoice.id));
        }
        println!("{}", row);
    }
}

pub(crate) fn print_invoice_detail(invoice: &Invoice, currency: &CurrencyTable, origin: &str) {
    let symbol = currency.symbol_for(invoice.currency.as_deref());

    println!("Invoice {}", invoice.id);
    println!(
        "  Project:       {}",
        invoice.project_title.as_deref().unwrap_or("Untitled Project")
    );
    println!(
        "  Client:        {}",
        invoice.client_name.as_deref().unwrap_or("Not specified")
    );
    println!("  Status:        {}", invoice.payment_status.badge());
    println!(
        "  Total payment: {}",
        money::format_money(invoice.total_payment, symbol)
    );
    println!(
        "  Created:       {}",
        time::format_date(&invoice.created_at)
    );
    println!(
        "  Last updated:  {}",
        time::format_time_of_day(invoice.updated_at.as_ref())
    );
    println!("  Link:          {}", share_link(origin, &invoice.id));
}
