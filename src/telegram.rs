//! Telegram Bot API: the one send operation the bot needs.

use crate::config::BotConfig;
use crate::error::BotError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends `text` to the configured chat.
///
/// Both a failed transport call and a non-success Bot API reply surface as
/// a delivery error; the caller decides whether that is fatal for the
/// iteration.
pub async fn send_message(
    client: &reqwest::Client,
    config: &BotConfig,
    text: &str,
) -> Result<(), BotError> {
    let url = format!(
        "{}/bot{}/sendMessage",
        config.telegram_api_base, config.telegram_token
    );

    let body = SendMessageRequest { chat_id: &config.telegram_chat_id, text };

    let resp = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| BotError::Delivery(format!("telegram request failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let detail = resp.text().await.unwrap_or_default();
        return Err(BotError::Delivery(format!("telegram API error {status}: {detail}")));
    }

    debug!("message delivered to chat {}", config.telegram_chat_id);
    Ok(())
}
