use anyhow::{anyhow, Context, Result};
use std::{env, fmt::Display, str::FromStr};

/// Required variable. An empty value counts as missing: a blank token in a
/// .env file must not get the bot past startup.
pub fn must(key: &str) -> Result<String> {
    let value = env::var(key).with_context(|| format!("missing required env: {key}"))?;
    if value.is_empty() {
        return Err(anyhow!("required env is empty: {key}"));
    }
    Ok(value)
}

pub fn opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

pub fn parse<T: FromStr>(key: &str, default: T) -> Result<T>
where
    <T as FromStr>::Err: Display,
{
    match opt(key) {
        Some(s) => s.parse::<T>().map_err(|e| anyhow!("failed to parse {key}='{s}': {e}")),
        None => Ok(default),
    }
}
