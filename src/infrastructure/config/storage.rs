//! Port record storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Where per-user port records are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one `<user id>.json` file per user.
    #[serde(default = "default_port_path")]
    pub port_path: PathBuf,
}

fn default_port_path() -> PathBuf {
    PathBuf::from("./")
}

impl StorageConfig {
    /// Check that the port directory exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `port_path` is not a directory.
    #[allow(clippy::result_large_err)]
    pub fn ensure_exists(&self) -> Result<()> {
        if self.port_path.is_dir() {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "storage.port_path",
            reason: format!("{} is not an existing directory", self.port_path.display()),
        }
        .into())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            port_path: default_port_path(),
        }
    }
}
