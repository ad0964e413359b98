use crate::session::SessionFile;
use anyhow::Result;
use std::path::PathBuf;

/// Signed-in identity management.
pub struct SessionOps {
    data_dir: PathBuf,
}

impl SessionOps {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn current(&self) -> Result<Option<String>> {
        let session = SessionFile::load_from(&self.path())?;
        Ok(session.user.filter(|u| !u.is_empty()))
    }

    pub fn login(&self, user: &str) -> Result<()> {
        let session = SessionFile {
            user: Some(user.to_string()),
        };
        session.save_to(&self.path())?;
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        let session = SessionFile::default();
        session.save_to(&self.path())?;
        Ok(())
    }

    pub fn path(&self) -> PathBuf {
        SessionFile::path_in(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn login_logout_cycle() {
        let temp = TempDir::new().unwrap();
        let ops = SessionOps::new(temp.path().to_path_buf());

        assert!(ops.current().unwrap().is_none());

        ops.login("user-1").unwrap();
        assert_eq!(ops.current().unwrap().as_deref(), Some("user-1"));

        ops.logout().unwrap();
        assert!(ops.current().unwrap().is_none());
    }

    #[test]
    fn empty_user_counts_as_signed_out() {
        let temp = TempDir::new().unwrap();
        let ops = SessionOps::new(temp.path().to_path_buf());

        ops.login("").unwrap();
        assert!(ops.current().unwrap().is_none());
    }
}
