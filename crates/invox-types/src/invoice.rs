use crate::timestamp::Timestamp;
use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Payment state of an invoice.
///
/// The stored value is an open string set, not a closed enum: `"paid"` is the
/// only value with dedicated behavior, everything else is preserved verbatim
/// and displayed as pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Other(String),
}

impl PaymentStatus {
    pub fn pending() -> Self {
        PaymentStatus::Other("pending".to_string())
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    /// Display badge: "Paid" or "Pending".
    pub fn badge(&self) -> &'static str {
        if self.is_paid() { "Paid" } else { "Pending" }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Other(s) => s.as_str(),
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "paid" {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Other(s)
        })
    }
}

/// Invoice document as stored on disk.
///
/// Field names are camelCase on the wire for compatibility with documents
/// written by earlier clients of the same store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Stable unique identifier; also the document file stem.
    pub id: String,

    /// Owner identity (opaque string).
    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    /// Amount due; absent in some older documents, treated as 0.
    #[serde(default)]
    pub total_payment: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Invoice {
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_at.to_datetime()
    }

    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_ref().and_then(|ts| ts.to_datetime())
    }
}

/// Caller-supplied fields for a new invoice; the store assigns id, status,
/// and timestamps.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    pub created_by: String,
    pub project_title: Option<String>,
    pub client_name: Option<String>,
    pub total_payment: f64,
    pub currency: Option<String>,
}

impl InvoiceDraft {
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            created_by: owner.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_roundtrips_open_set() {
        let paid: PaymentStatus = serde_json::from_str(r#""paid""#).unwrap();
        assert!(paid.is_paid());
        assert_eq!(serde_json::to_string(&paid).unwrap(), r#""paid""#);

        let overdue: PaymentStatus = serde_json::from_str(r#""overdue""#).unwrap();
        assert!(!overdue.is_paid());
        assert_eq!(overdue.badge(), "Pending");
        assert_eq!(serde_json::to_string(&overdue).unwrap(), r#""overdue""#);
    }

    #[test]
    fn deserializes_sparse_document_with_defaults() {
        let doc = r#"{
            "id": "abc123",
            "createdBy": "user-1",
            "createdAt": "2024-01-01T10:30:00Z"
        }"#;
        let invoice: Invoice = serde_json::from_str(doc).unwrap();
        assert_eq!(invoice.total_payment, 0.0);
        assert!(invoice.project_title.is_none());
        assert!(invoice.updated_at.is_none());
        assert!(!invoice.payment_status.is_paid());
    }

    #[test]
    fn serializes_camel_case_field_names() {
        let invoice = Invoice {
            id: "abc123".to_string(),
            created_by: "user-1".to_string(),
            project_title: Some("Website".to_string()),
            client_name: None,
            payment_status: PaymentStatus::Paid,
            total_payment: 150.0,
            currency: Some("USD".to_string()),
            created_at: Timestamp::Millis(1_704_105_000_000),
            updated_at: None,
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["createdBy"], "user-1");
        assert_eq!(json["projectTitle"], "Website");
        assert_eq!(json["paymentStatus"], "paid");
        assert_eq!(json["totalPayment"], 150.0);
    }
}
