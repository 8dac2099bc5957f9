use crate::config::{env_parsing, Redacted};
use anyhow::Result;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

#[derive(Clone, Debug)]
pub struct BotConfig {
    // --- required secrets ---
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    // --- optional, with defaults ---
    pub practicum_endpoint: String, // homework statuses URL
    pub telegram_api_base: String,  // e.g. https://api.telegram.org

    /// Fixed pause between poll iterations.
    pub retry_period: Duration,
}

impl BotConfig {
    /// Reads the whole configuration from the environment. Missing or empty
    /// secrets fail here, before anything touches the network; this is the
    /// only condition that stops the bot.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env");

        let practicum_token = env_parsing::must("PRACTICUM_TOKEN")?;
        let telegram_token = env_parsing::must("TELEGRAM_TOKEN")?;
        let telegram_chat_id = env_parsing::must("TELEGRAM_CHAT_ID")?;

        let practicum_endpoint =
            env_parsing::opt("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let telegram_api_base = env_parsing::opt("TELEGRAM_API_BASE")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.into());

        let retry_period: u64 =
            env_parsing::parse("RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)?;
        let retry_period = Duration::from_secs(retry_period);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint,
            telegram_api_base,
            retry_period,
        })
    }

    pub fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}
