use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub preview_cache_capacity: usize,
    pub preview_timeout: Duration,
    pub preview_queue_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            preview_cache_capacity: 5,
            preview_timeout: Duration::from_secs(30),
            preview_queue_depth: 64,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let preview_cache_capacity =
            parse_or(&lookup, "PREVIEW_CACHE_CAPACITY", defaults.preview_cache_capacity)?;
        if preview_cache_capacity == 0 {
            bail!("PREVIEW_CACHE_CAPACITY must be at least 1");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            preview_cache_capacity,
            preview_timeout: Duration::from_secs(parse_or(
                &lookup,
                "PREVIEW_TIMEOUT_SECS",
                defaults.preview_timeout.as_secs(),
            )?),
            preview_queue_depth: parse_or(
                &lookup,
                "PREVIEW_QUEUE_DEPTH",
                defaults.preview_queue_depth,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
