use futures::stream::StreamExt;
use invox_sdk::{Client, InvoiceDraft, StoreEvent};
use tempfile::TempDir;

fn draft(owner: &str, title: &str) -> InvoiceDraft {
    InvoiceDraft {
        created_by: owner.to_string(),
        project_title: Some(title.to_string()),
        client_name: None,
        total_payment: 250.0,
        currency: Some("USD".to_string()),
    }
}

#[tokio::test]
async fn create_list_delete_roundtrip() {
    let temp = TempDir::new().unwrap();
    let client = Client::connect(temp.path().join("invox")).unwrap();

    let created = client.create(draft("user-1", "Website")).await.unwrap();

    let listed = client.list("user-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    client.delete(&created.id).await.unwrap();
    assert!(client.list("user-1").await.unwrap().is_empty());
}

#[tokio::test]
async fn get_missing_invoice_is_not_found() {
    let temp = TempDir::new().unwrap();
    let client = Client::connect(temp.path().join("invox")).unwrap();

    let err = client.get("nope").await.unwrap_err();
    assert!(matches!(err, invox_sdk::Error::NotFound(_)));
}

#[tokio::test]
async fn watch_delivers_initial_snapshot() {
    let temp = TempDir::new().unwrap();
    let client = Client::connect(temp.path().join("invox")).unwrap();

    client.create(draft("user-1", "Website")).await.unwrap();
    client.create(draft("user-2", "Not mine")).await.unwrap();

    let mut stream = client.watch("user-1").start().unwrap();

    match stream.next().await {
        Some(StoreEvent::Snapshot(invoices)) => {
            assert_eq!(invoices.len(), 1);
            assert_eq!(invoices[0].created_by, "user-1");
        }
        other => panic!("expected initial snapshot, got {:?}", other.map(|_| ())),
    }
}
