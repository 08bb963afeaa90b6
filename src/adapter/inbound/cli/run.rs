//! Handler for running the bot.

use tokio::signal;
use tracing::info;

use super::command::Cli;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Load configuration, initialize logging and run until Ctrl-C.
pub async fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::load_or_default(&cli.config)?;
    cli.apply_overrides(&mut config);

    config.init_logging();
    config.validate_for_run()?;

    info!(
        port_path = %config.storage.port_path.display(),
        timezone = %config.session.timezone,
        "Starting bot..."
    );

    tokio::select! {
        result = bootstrap::run(config) => result?,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("thot-bot stopped");
    Ok(())
}
