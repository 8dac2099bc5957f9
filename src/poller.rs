//! The fetch-validate-notify loop.

use crate::config::BotConfig;
use crate::error::BotError;
use crate::{practicum, telegram, verdict};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Runs the bot until the process is killed. Startup has already checked
/// the configuration, so nothing in here is allowed to end the loop: every
/// iteration failure is logged, reported to the chat, and waited out.
pub async fn run(client: &reqwest::Client, config: &BotConfig) {
    let mut timestamp = now_unix();
    info!("polling every {}s", config.retry_period.as_secs());

    loop {
        if let Err(err) = poll_once(client, config, &mut timestamp).await {
            let message = format!("Program failure: {err}");
            error!("{message}");

            // Best effort. If even this send fails, the next cycle is the
            // recovery path.
            if let Err(notify_err) = telegram::send_message(client, config, &message).await {
                error!("could not report the failure to the chat: {notify_err}");
            }
        }

        sleep(config.retry_period).await;
    }
}

/// One poll iteration: fetch with the current cursor, validate, advance the
/// cursor, then format and deliver every record in order.
async fn poll_once(
    client: &reqwest::Client,
    config: &BotConfig,
    timestamp: &mut i64,
) -> Result<(), BotError> {
    debug!("requesting homework statuses from_date={timestamp}");

    let raw = practicum::fetch_homework_statuses(client, config, *timestamp).await?;
    let page = practicum::check_response(raw)?;

    // Advance before delivery: a failed send must not replay this window on
    // the next poll.
    *timestamp = page.current_date;

    for homework in &page.homeworks {
        let message = verdict::parse_status(homework)?;
        telegram::send_message(client, config, &message).await?;
    }

    Ok(())
}

fn now_unix() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs() as i64
}
