//! Pure view-model builders for the dashboard renderer.
//!
//! Everything here is a function of the app state plus render context;
//! no IO, no stored state. The share link in particular is regenerated on
//! every build and never persisted.

use crate::presentation::formatters::{money, time};
use crate::presentation::renderers::tui::app::AppState;
use invox_types::{CurrencyTable, Invoice, share_link};

pub(crate) struct InvoiceCardView {
    pub id: String,
    pub title: String,
    pub badge: &'static str,
    pub is_paid: bool,
    pub client: String,
    pub amount: String,
    pub link: String,
    pub created: String,
    pub updated: String,
}

pub(crate) struct DashboardViewModel {
    pub user: Option<String>,
    pub loading: bool,
    pub empty: bool,
    pub creating: bool,
    pub cards: Vec<InvoiceCardView>,
    pub total_count: usize,
    pub has_more: bool,
    pub load_more_step: usize,
    pub pending_delete: Option<String>,
    pub deleting: bool,
    pub status: Option<String>,
}

pub(crate) fn build_card(
    invoice: &Invoice,
    currency: &CurrencyTable,
    origin: &str,
) -> InvoiceCardView {
    let symbol = currency.symbol_for(invoice.currency.as_deref());

    InvoiceCardView {
        id: invoice.id.clone(),
        title: invoice
            .project_title
            .clone()
            .unwrap_or_else(|| "Untitled Project".to_string()),
        badge: invoice.payment_status.badge(),
        is_paid: invoice.payment_status.is_paid(),
        client: invoice
            .client_name
            .clone()
            .unwrap_or_else(|| "Not specified".to_string()),
        amount: money::format_money(invoice.total_payment, symbol),
        link: share_link(origin, &invoice.id),
        created: time::format_date(&invoice.created_at),
        updated: time::format_time_of_day(invoice.updated_at.as_ref()),
    }
}

pub(crate) fn build_dashboard_view(
    state: &AppState,
    currency: &CurrencyTable,
    origin: &str,
) -> DashboardViewModel {
    DashboardViewModel {
        user: state.user.clone(),
        loading: state.loading,
        empty: state.is_empty(),
        creating: state.creating,
        cards: state
            .visible()
            .iter()
            .map(|invoice| build_card(invoice, currency, origin))
            .collect(),
        total_count: state.invoices.len(),
        has_more: state.has_more(),
        load_more_step: state.device.increment(),
        pending_delete: state.pending_delete.clone(),
        deleting: state.deleting,
        status: state.status.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::renderers::tui::app::DeviceClass;
    use invox_types::{PaymentStatus, Timestamp};

    fn invoice(id: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            created_by: "user-1".to_string(),
            project_title: None,
            client_name: None,
            payment_status: PaymentStatus::pending(),
            total_payment: 0.0,
            currency: None,
            created_at: Timestamp::Text("2024-01-01T10:30:00Z".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn card_link_matches_the_public_route_exactly() {
        let card = build_card(&invoice("abc123"), &CurrencyTable::default(), "https://x.test");
        assert_eq!(card.link, "https://x.test/invoice/abc123/text");
    }

    #[test]
    fn card_amount_uses_the_currency_table() {
        let mut pkr = invoice("a");
        pkr.currency = Some("PKR".to_string());
        pkr.total_payment = 1500.0;

        let card = build_card(&pkr, &CurrencyTable::default(), "https://x.test");
        assert_eq!(card.amount, "\u{20A8}1,500");

        let mut unknown = invoice("b");
        unknown.currency = Some("EUR".to_string());
        unknown.total_payment = 42.0;
        let card = build_card(&unknown, &CurrencyTable::default(), "https://x.test");
        assert_eq!(card.amount, "$42");
    }

    #[test]
    fn card_falls_back_for_missing_display_fields() {
        let card = build_card(&invoice("a"), &CurrencyTable::default(), "https://x.test");
        assert_eq!(card.title, "Untitled Project");
        assert_eq!(card.client, "Not specified");
        assert_eq!(card.badge, "Pending");
        assert_eq!(card.updated, "N/A");
    }

    #[test]
    fn view_reports_load_more_only_past_the_window() {
        let mut state = AppState::new(DeviceClass::from_viewport_width(1024));
        state.apply_snapshot((0..16).map(|i| invoice(&format!("inv-{}", i))).collect());

        let view = build_dashboard_view(&state, &CurrencyTable::default(), "https://x.test");
        assert_eq!(view.cards.len(), 15);
        assert_eq!(view.total_count, 16);
        assert!(view.has_more);
        assert_eq!(view.load_more_step, 15);

        state.load_more();
        let view = build_dashboard_view(&state, &CurrencyTable::default(), "https://x.test");
        assert!(!view.has_more);
    }
}
