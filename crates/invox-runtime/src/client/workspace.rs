use crate::client::{InvoiceOps, SessionOps, WatchService};
use crate::config::Config;
use anyhow::Result;
use invox_store::InvoiceStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Facade over an invox data directory: configuration, the document store,
/// the signed-in session, and live subscriptions.
pub struct Invox {
    data_dir: PathBuf,
    config: Arc<Config>,
    store: Arc<InvoiceStore>,
}

impl Invox {
    /// Open (or initialize) the workspace at `data_dir`. A default config is
    /// written on first open.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config_path = data_dir.join("config.toml");

        let config = if config_path.exists() {
            Config::load_from(&config_path)?
        } else {
            let default = Config::default();
            default.save_to(&config_path)?;
            default
        };

        let store_root = config.store_root_in(&data_dir);
        let store = InvoiceStore::open(store_root)?;

        Ok(Self {
            data_dir,
            config: Arc::new(config),
            store: Arc::new(store),
        })
    }

    pub fn invoices(&self) -> InvoiceOps {
        InvoiceOps::new(self.store.clone())
    }

    pub fn session(&self) -> SessionOps {
        SessionOps::new(self.data_dir.clone())
    }

    pub fn watch(&self) -> WatchService {
        WatchService::new(self.store.root().to_path_buf())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_writes_default_config_on_first_use() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("invox");

        let workspace = Invox::open(data_dir.clone()).unwrap();
        assert!(data_dir.join("config.toml").exists());
        assert!(data_dir.join("invoices").is_dir());
        assert_eq!(workspace.config().origin, "https://invox.app");
    }

    #[test]
    fn open_respects_existing_config() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("invox");

        let mut config = Config::default();
        config.origin = "https://x.test".to_string();
        config.save_to(&data_dir.join("config.toml")).unwrap();

        let workspace = Invox::open(data_dir).unwrap();
        assert_eq!(workspace.config().origin, "https://x.test");
    }
}
