//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use invox_store::InvoiceStore;
use invox_types::{Invoice, InvoiceDraft};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment: a throwaway data directory and a command
/// runner wired to it.
///
/// # Example
/// ```no_run
/// use invox_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.command().args(["init"]).assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".invox");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn base_path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    /// The invoice store inside this world's data directory.
    pub fn store(&self) -> Result<InvoiceStore> {
        Ok(InvoiceStore::open(self.data_dir.join("invoices"))?)
    }

    /// Seed an invoice document directly into the store.
    pub fn seed_invoice(&self, draft: InvoiceDraft) -> Result<Invoice> {
        Ok(self.store()?.create(draft)?)
    }

    /// Seed a raw document, bypassing the store's stamping. Useful for
    /// legacy timestamp shapes and ordering setups.
    pub fn seed_raw_document(&self, id: &str, json: &str) -> Result<()> {
        let store = self.store()?;
        std::fs::write(store.document_path(id), json)?;
        Ok(())
    }

    /// A CLI command pre-wired to this world's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("invox").expect("invox binary not built");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }
}
