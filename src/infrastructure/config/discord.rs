//! Discord gateway configuration.

use serde::Deserialize;

/// Discord bot configuration.
#[derive(Clone, Default, Deserialize)]
pub struct DiscordConfig {
    /// Bot authentication token. Usually supplied through `DISCORD_AUTH`.
    #[serde(default)]
    pub token: String,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &if self.token.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}
