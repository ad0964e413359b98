use crate::{Error, Result};
use chrono::{DateTime, Utc};
use invox_types::{Invoice, InvoiceDraft, PaymentStatus, Timestamp};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Document store: one JSON file per invoice under a root directory.
///
/// The file stem is the invoice id, which gives id uniqueness for free.
/// Reads are schema-on-read: documents that fail to parse are skipped by
/// queries instead of failing them, so one bad file never takes down the
/// whole list.
pub struct InvoiceStore {
    root: PathBuf,
}

impl InvoiceStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a new invoice from a draft. Assigns the id, pending status,
    /// and creation/update timestamps.
    pub fn create(&self, draft: InvoiceDraft) -> Result<Invoice> {
        let now = Timestamp::now();
        let invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            created_by: draft.created_by,
            project_title: draft.project_title,
            client_name: draft.client_name,
            payment_status: PaymentStatus::pending(),
            total_payment: draft.total_payment,
            currency: draft.currency,
            created_at: now.clone(),
            updated_at: Some(now),
        };
        self.write_document(&invoice)?;
        Ok(invoice)
    }

    pub fn get(&self, id: &str) -> Result<Option<Invoice>> {
        let path = self.document_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Persist a modified invoice, restamping `updatedAt`.
    pub fn update(&self, mut invoice: Invoice) -> Result<Invoice> {
        if !self.document_path(&invoice.id).exists() {
            return Err(Error::NotFound(invoice.id));
        }
        invoice.updated_at = Some(Timestamp::now());
        self.write_document(&invoice)?;
        Ok(invoice)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.document_path(id);
        if !path.exists() {
            return Err(Error::NotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    /// Full snapshot query: every invoice owned by `owner`, ordered by
    /// creation time descending. Unparseable documents are skipped.
    pub fn query(&self, owner: &str) -> Result<Vec<Invoice>> {
        let mut invoices: Vec<Invoice> = Vec::new();

        for entry in walkdir::WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let Ok(content) = std::fs::read_to_string(path) else {
                continue;
            };
            let Ok(invoice) = serde_json::from_str::<Invoice>(&content) else {
                continue;
            };

            if invoice.created_by == owner {
                invoices.push(invoice);
            }
        }

        invoices.sort_by(|a, b| {
            sort_key(b)
                .cmp(&sort_key(a))
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(invoices)
    }

    pub fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn write_document(&self, invoice: &Invoice) -> Result<()> {
        let content = serde_json::to_string_pretty(invoice)?;
        let path = self.document_path(&invoice.id);

        // Write-then-rename keeps a concurrent watcher from observing a
        // half-written document.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn sort_key(invoice: &Invoice) -> Option<DateTime<Utc>> {
    invoice.created_time()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(owner: &str, title: &str) -> InvoiceDraft {
        InvoiceDraft {
            created_by: owner.to_string(),
            project_title: Some(title.to_string()),
            client_name: None,
            total_payment: 100.0,
            currency: None,
        }
    }

    fn write_raw(store: &InvoiceStore, id: &str, json: &str) {
        std::fs::write(store.document_path(id), json).unwrap();
    }

    #[test]
    fn create_then_query_returns_the_record() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path())?;

        let created = store.create(draft("user-1", "Website"))?;
        let listed = store.query("user-1")?;

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert!(!listed[0].payment_status.is_paid());
        Ok(())
    }

    #[test]
    fn query_filters_by_owner() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path())?;

        store.create(draft("user-1", "Mine"))?;
        store.create(draft("user-2", "Theirs"))?;

        let listed = store.query("user-1")?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].project_title.as_deref(), Some("Mine"));
        Ok(())
    }

    #[test]
    fn query_orders_by_creation_time_descending() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path())?;

        write_raw(
            &store,
            "older",
            r#"{"id":"older","createdBy":"u","createdAt":"2024-01-01T00:00:00Z"}"#,
        );
        write_raw(
            &store,
            "newer",
            r#"{"id":"newer","createdBy":"u","createdAt":"2024-06-01T00:00:00Z"}"#,
        );

        let listed = store.query("u")?;
        assert_eq!(listed[0].id, "newer");
        assert_eq!(listed[1].id, "older");
        Ok(())
    }

    #[test]
    fn query_skips_unparseable_documents() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path())?;

        store.create(draft("user-1", "Good"))?;
        std::fs::write(temp.path().join("broken.json"), "{ not json").unwrap();

        let listed = store.query("user-1")?;
        assert_eq!(listed.len(), 1);
        Ok(())
    }

    #[test]
    fn delete_removes_the_document() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path())?;

        let created = store.create(draft("user-1", "Website"))?;
        store.delete(&created.id)?;

        assert!(store.query("user-1")?.is_empty());
        assert!(!store.document_path(&created.id).exists());
        Ok(())
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path()).unwrap();

        match store.delete("nope") {
            Err(Error::NotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn update_restamps_updated_at() -> Result<()> {
        let temp = TempDir::new().unwrap();
        let store = InvoiceStore::open(temp.path())?;

        let mut created = store.create(draft("user-1", "Website"))?;
        created.payment_status = PaymentStatus::Paid;
        let updated = store.update(created)?;

        let fetched = store.get(&updated.id)?.unwrap();
        assert!(fetched.payment_status.is_paid());
        assert!(fetched.updated_at.is_some());
        Ok(())
    }
}
