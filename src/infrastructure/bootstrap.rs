//! Composition root: wires configuration into the store, router and gateway.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::discord;
use crate::adapter::outbound::store::FileStore;
use crate::app::CommandRouter;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::PortfolioStore;

/// Build the command router from configuration.
///
/// # Errors
///
/// Returns an error if the session timezone is invalid.
#[allow(clippy::result_large_err)]
pub fn build_router<S: PortfolioStore>(config: &Config, store: S) -> Result<CommandRouter<S>> {
    let calendar = config.session.calendar()?;
    Ok(CommandRouter::new(store, calendar))
}

/// Run the bot against a file-backed store until the gateway stops.
///
/// # Errors
///
/// Returns an error if configuration is unusable or the gateway fails.
pub async fn run(config: Config) -> Result<()> {
    config.storage.ensure_exists()?;

    let store = FileStore::new(config.storage.port_path.clone());
    let router = Arc::new(build_router(&config, store)?);

    info!(
        port_path = %config.storage.port_path.display(),
        "Port store ready"
    );

    discord::run(&config.discord.token, router).await
}
