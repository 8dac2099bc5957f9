mod config;
mod error;
mod poller;
mod practicum;
mod telegram;
mod verdict;

use anyhow::Result;
use config::BotConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // Without the secrets there is no API to poll and no chat to
            // warn, so this is the one failure that stops the process.
            error!("configuration error, refusing to start: {err:#}");
            return Err(err);
        }
    };

    info!("config = {:?}", config.redacted());
    info!("starting homework status bot");

    let client = reqwest::Client::new();
    poller::run(&client, &config).await;

    Ok(())
}
