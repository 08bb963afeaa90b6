//! Trading-session calendar configuration.

use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::SessionCalendar;
use crate::error::{ConfigError, Result};

/// Reference timezone for market-hours checks.
///
/// The session hours are expressed in this timezone. The default, UTC,
/// places the 22:00 maintenance break at 4 PM US Central standard time.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// IANA timezone name, e.g. `UTC` or `America/Chicago`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl SessionConfig {
    /// Build the session calendar for the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown timezone name.
    #[allow(clippy::result_large_err)]
    pub fn calendar(&self) -> Result<SessionCalendar> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "session.timezone",
                reason: format!("{e}"),
            })?;
        Ok(SessionCalendar::new(timezone))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}
