use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reading or writing a user's port record.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("port storage I/O failed for user {user}: {source}")]
    Io {
        user: String,
        #[source]
        source: std::io::Error,
    },

    #[error("port record for user {user} is malformed: {source}")]
    Decode {
        user: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode port for user {user}: {source}")]
    Encode {
        user: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Discord gateway error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<poise::serenity_prelude::Error> for Error {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        Error::Discord(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_display_transparently() {
        let err: Error = ConfigError::MissingField {
            field: "discord.token",
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "missing required field: discord.token");
    }
}
