use anyhow::Context;
use clap::Parser;
use thotbot::adapter::inbound::cli::{command::Cli, run};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run::execute(&cli).await {
        error!(error = %e, "Fatal error");
        return Err(e).context("thot-bot exited with an error");
    }
    Ok(())
}
