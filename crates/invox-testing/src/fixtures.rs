//! Sample invoice data for tests.

use invox_types::InvoiceDraft;

pub fn draft(owner: &str, title: &str) -> InvoiceDraft {
    InvoiceDraft {
        created_by: owner.to_string(),
        project_title: Some(title.to_string()),
        client_name: Some("Acme Corp".to_string()),
        total_payment: 1500.0,
        currency: Some("USD".to_string()),
    }
}

/// A raw document with a chosen id and creation time, for ordering and
/// timestamp-normalization scenarios.
pub fn raw_document(id: &str, owner: &str, created_at_rfc3339: &str) -> String {
    format!(
        r#"{{
  "id": "{id}",
  "createdBy": "{owner}",
  "projectTitle": "Fixture {id}",
  "paymentStatus": "pending",
  "totalPayment": 100,
  "createdAt": "{created_at_rfc3339}",
  "updatedAt": "{created_at_rfc3339}"
}}"#
    )
}
