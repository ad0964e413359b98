use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Signed-in identity, persisted as `session.toml` in the data directory.
///
/// The dashboard watches this file so an identity change while it is open
/// swaps the live subscription over to the new user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionFile {
    #[serde(default)]
    pub user: Option<String>,
}

impl SessionFile {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("session.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_means_signed_out() {
        let temp = TempDir::new().unwrap();
        let session = SessionFile::load_from(&SessionFile::path_in(temp.path())).unwrap();
        assert!(session.user.is_none());
    }

    #[test]
    fn login_roundtrips() {
        let temp = TempDir::new().unwrap();
        let path = SessionFile::path_in(temp.path());

        let session = SessionFile {
            user: Some("user-1".to_string()),
        };
        session.save_to(&path).unwrap();

        let loaded = SessionFile::load_from(&path).unwrap();
        assert_eq!(loaded.user.as_deref(), Some("user-1"));
    }
}
