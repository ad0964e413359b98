use crate::{Error, Result};
use invox_types::CurrencyTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. INVOX_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.invox (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: INVOX_PATH environment variable
    if let Ok(env_path) = std::env::var("INVOX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("invox"));
    }

    // Priority 4: Fallback to ~/.invox (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".invox"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrencyConfig {
    /// Currency-code → symbol overrides, merged over the built-in table.
    #[serde(default)]
    pub symbols: HashMap<String, String>,

    /// Fallback symbol for codes not in the table.
    #[serde(default)]
    pub default_symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL that shareable invoice links are built from.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Directory holding invoice documents. Defaults to `<data_dir>/invoices`.
    #[serde(default)]
    pub store_root: Option<PathBuf>,

    #[serde(default)]
    pub currency: CurrencyConfig,
}

fn default_origin() -> String {
    "https://invox.app".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            store_root: None,
            currency: CurrencyConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective symbol table: built-ins overlaid with config entries.
    pub fn currency_table(&self) -> CurrencyTable {
        CurrencyTable::with_overrides(
            &self.currency.symbols,
            self.currency.default_symbol.as_deref(),
        )
    }

    /// Effective store root for a given data directory.
    pub fn store_root_in(&self, data_dir: &std::path::Path) -> PathBuf {
        self.store_root
            .clone()
            .unwrap_or_else(|| data_dir.join("invoices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.origin, "https://invox.app");
        assert!(config.store_root.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.origin = "https://x.test".to_string();
        config
            .currency
            .symbols
            .insert("EUR".to_string(), "\u{20AC}".to_string());

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.origin, "https://x.test");
        assert_eq!(
            loaded.currency.symbols.get("EUR").map(|s| s.as_str()),
            Some("\u{20AC}")
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.origin, "https://invox.app");

        Ok(())
    }

    #[test]
    fn test_currency_table_merges_overrides() {
        let mut config = Config::default();
        config
            .currency
            .symbols
            .insert("PKR".to_string(), "Rs".to_string());

        let table = config.currency_table();
        assert_eq!(table.symbol_for(Some("PKR")), "Rs");
        assert_eq!(table.symbol_for(Some("USD")), "$");
    }

    #[test]
    fn test_store_root_defaults_under_data_dir() {
        let config = Config::default();
        let root = config.store_root_in(std::path::Path::new("/data/invox"));
        assert_eq!(root, PathBuf::from("/data/invox/invoices"));
    }
}
