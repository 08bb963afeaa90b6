//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all bot settings.
//! Configuration is loaded from a TOML file; command-line flags and the
//! `DISCORD_AUTH` / `PORT_PATH` environment variables override it.
//!
//! # Example
//!
//! ```no_run
//! use thotbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::discord::DiscordConfig;
use super::logging::LoggingConfig;
use super::session::SessionConfig;
use super::storage::StorageConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Built once at startup and handed to the store, router and gateway.
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Discord bot credentials.
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Port record storage location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Market-hours reference timezone.
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the content is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.session.calendar()?;

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be `pretty` or `json`".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Check the settings needed to connect, after overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if no bot token is set or the port directory is missing.
    #[allow(clippy::result_large_err)]
    pub fn validate_for_run(&self) -> Result<()> {
        if self.discord.token.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "discord.token",
            }
            .into());
        }
        self.storage.ensure_exists()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.discord.token, "");
        assert_eq!(config.storage.port_path, Path::new("./"));
        assert_eq!(config.session.timezone, "UTC");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::parse_toml(
            r#"
[discord]
token = "abc"

[storage]
port_path = "/var/lib/thotbot"

[session]
timezone = "America/Chicago"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.discord.token, "abc");
        assert_eq!(config.storage.port_path, Path::new("/var/lib/thotbot"));
        assert_eq!(
            config.session.calendar().unwrap().timezone(),
            chrono_tz::America::Chicago
        );
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = Config::parse_toml("[session]\ntimezone = \"Mars/Olympus\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "session.timezone",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn run_requires_token() {
        let config = Config::default();
        assert!(matches!(
            config.validate_for_run(),
            Err(Error::Config(ConfigError::MissingField {
                field: "discord.token"
            }))
        ));
    }

    #[test]
    fn run_requires_existing_port_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.discord.token = "abc".to_string();
        config.storage.port_path = dir.path().join("missing");

        assert!(matches!(
            config.validate_for_run(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "storage.port_path",
                ..
            }))
        ));

        config.storage.port_path = dir.path().to_path_buf();
        assert!(config.validate_for_run().is_ok());
    }

    #[test]
    fn debug_output_hides_token() {
        let mut config = Config::default();
        config.discord.token = "super-secret".to_string();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
