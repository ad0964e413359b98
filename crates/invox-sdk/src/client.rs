use crate::error::{Error, Result};
use crate::watch::WatchBuilder;
use invox_runtime::{Invox, resolve_data_dir};
use invox_types::{Invoice, InvoiceDraft};
use std::path::PathBuf;
use std::sync::Arc;

/// Async client over an invox data directory.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Invox>,
}

impl Client {
    /// Connect to the workspace at `data_dir`, initializing it if needed.
    pub fn connect(data_dir: PathBuf) -> Result<Self> {
        let inner = Invox::open(data_dir)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Connect to the default workspace (respects `INVOX_PATH`).
    pub fn connect_default() -> Result<Self> {
        let data_dir = resolve_data_dir(None).map_err(|e| Error::Internal(e.into()))?;
        Self::connect(data_dir)
    }

    pub async fn list(&self, owner: &str) -> Result<Vec<Invoice>> {
        let ops = self.inner.invoices();
        let owner = owner.to_string();
        run_blocking(move || ops.list(&owner)).await
    }

    pub async fn create(&self, draft: InvoiceDraft) -> Result<Invoice> {
        let ops = self.inner.invoices();
        run_blocking(move || ops.create(draft)).await
    }

    pub async fn get(&self, id: &str) -> Result<Invoice> {
        let ops = self.inner.invoices();
        let id = id.to_string();
        let found = run_blocking(move || ops.get(&id)).await?;
        found.ok_or_else(|| Error::NotFound("invoice".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let ops = self.inner.invoices();
        let id = id.to_string();
        run_blocking(move || ops.delete(&id)).await
    }

    /// Start building a live subscription for one owner's invoices.
    pub fn watch(&self, owner: &str) -> WatchBuilder {
        WatchBuilder::new(self.inner.clone(), owner.to_string())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Internal(anyhow::anyhow!("blocking task failed: {}", e)))?
        .map_err(Error::Internal)
}
