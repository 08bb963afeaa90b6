//! JSON-file port storage, one file per user.
//!
//! Records live at `<base_dir>/<user id>.json` and hold `{"holdings": {...}}`.
//! Saves go through a temp file and a rename so a reader never observes a
//! partially written record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::{Portfolio, UserKey};
use crate::error::PersistenceError;
use crate::port::PortfolioStore;

/// Port store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`. The directory is not created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the record for `user`.
    #[must_use]
    pub fn record_path(&self, user: &UserKey) -> PathBuf {
        self.base_dir.join(user.record_name())
    }

    async fn write_atomic(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let temp_path = path.with_extension("json.tmp");

        let result = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(bytes).await?;
            file.sync_all().await?;
            fs::rename(&temp_path, path).await
        }
        .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }
}

fn io_error(user: &UserKey, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        user: user.to_string(),
        source,
    }
}

impl PortfolioStore for FileStore {
    async fn load(&self, user: &UserKey) -> Result<Option<Portfolio>, PersistenceError> {
        let path = self.record_path(user);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(user, e)),
        };

        let portfolio =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Decode {
                user: user.to_string(),
                source,
            })?;
        Ok(Some(portfolio))
    }

    async fn save(&self, user: &UserKey, portfolio: &Portfolio) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec(portfolio).map_err(|source| PersistenceError::Encode {
            user: user.to_string(),
            source,
        })?;

        let path = self.record_path(user);
        self.write_atomic(&path, &json)
            .await
            .map_err(|e| io_error(user, e))?;

        debug!(user = %user, path = %path.display(), "Saved port");
        Ok(())
    }

    async fn delete(&self, user: &UserKey) -> Result<(), PersistenceError> {
        let path = self.record_path(user);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(user = %user, path = %path.display(), "Deleted port");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(user, e)),
        }
    }
}
