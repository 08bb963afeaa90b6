//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::settings::Config;

/// Bot for Thots discord channel
#[derive(Parser, Debug)]
#[command(name = "thot-bot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Authentication token for the Discord app
    #[arg(long, env = "DISCORD_AUTH", hide_env_values = true)]
    pub discord_auth: Option<String>,

    /// Directory to store ports
    #[arg(long, env = "PORT_PATH")]
    pub port_path: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Apply flag and environment overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref token) = self.discord_auth {
            config.discord.token = token.clone();
        }
        if let Some(ref path) = self.port_path {
            config.storage.port_path = path.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_name() {
        use clap::CommandFactory;
        assert_eq!(Cli::command().get_name(), "thot-bot");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "thot-bot",
            "--discord-auth",
            "token",
            "--port-path",
            "/tmp/ports",
            "--log-level",
            "debug",
            "--json-logs",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.discord.token, "token");
        assert_eq!(config.storage.port_path, PathBuf::from("/tmp/ports"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli {
            config: PathBuf::from("config.toml"),
            discord_auth: None,
            port_path: None,
            log_level: None,
            json_logs: false,
        };
        let mut config = Config::default();
        config.discord.token = "from-file".to_string();
        cli.apply_overrides(&mut config);

        assert_eq!(config.discord.token, "from-file");
        assert_eq!(config.logging.format, "pretty");
    }
}
