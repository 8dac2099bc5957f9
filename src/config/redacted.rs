use super::BotConfig;

pub struct Redacted<'a>(pub(crate) &'a BotConfig);

impl std::fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.0;
        f.debug_struct("BotConfig")
            .field("practicum_token", &mask(&c.practicum_token))
            .field("telegram_token", &mask(&c.telegram_token))
            .field("telegram_chat_id", &mask(&c.telegram_chat_id))
            .field("practicum_endpoint", &c.practicum_endpoint)
            .field("telegram_api_base", &c.telegram_api_base)
            .field("retry_period_secs", &c.retry_period.as_secs())
            .finish()
    }
}

fn mask(s: &str) -> String {
    if s.len() <= 6 { "***".into() } else { format!("{}***", &s[..3]) }
}
