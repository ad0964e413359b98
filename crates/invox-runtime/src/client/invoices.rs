use anyhow::{Context, Result};
use invox_store::InvoiceStore;
use invox_types::{Invoice, InvoiceDraft, PaymentStatus};
use std::sync::Arc;

/// Invoice operations against the document store.
#[derive(Clone)]
pub struct InvoiceOps {
    store: Arc<InvoiceStore>,
}

impl InvoiceOps {
    pub fn new(store: Arc<InvoiceStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, draft: InvoiceDraft) -> Result<Invoice> {
        self.store.create(draft).context("failed to create invoice")
    }

    /// Full snapshot of one owner's invoices, newest first.
    pub fn list(&self, owner: &str) -> Result<Vec<Invoice>> {
        self.store
            .query(owner)
            .context("failed to query invoices")
    }

    pub fn get(&self, id: &str) -> Result<Option<Invoice>> {
        self.store
            .get(id)
            .with_context(|| format!("failed to read invoice {}", id))
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.store
            .delete(id)
            .with_context(|| format!("failed to delete invoice {}", id))
    }

    pub fn mark_paid(&self, id: &str) -> Result<Invoice> {
        let mut invoice = self
            .store
            .get(id)?
            .ok_or_else(|| anyhow::anyhow!("Invoice not found: {}", id))?;
        invoice.payment_status = PaymentStatus::Paid;
        self.store
            .update(invoice)
            .with_context(|| format!("failed to update invoice {}", id))
    }
}
