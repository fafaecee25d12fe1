//! Upstream data source configuration (PokeAPI + cache).

use std::time::Duration;

use crate::config::game::env_parse;
use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Reference retention window: 7 days.
const DEFAULT_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const DEFAULT_CACHE_CAPACITY: u64 = 2048;

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl UpstreamConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// - `POKEAPI_BASE_URL`
    /// - `POKEAPI_TIMEOUT_MS`
    /// - `POKEAPI_CACHE_TTL_SECS`
    /// - `POKEAPI_CACHE_CAPACITY`
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = match std::env::var("POKEAPI_BASE_URL") {
            Ok(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(AppError::config(format!(
                        "POKEAPI_BASE_URL must be an http(s) URL: {url}"
                    )));
                }
                url
            }
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(env_parse("POKEAPI_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?),
            cache_ttl: Duration::from_secs(env_parse(
                "POKEAPI_CACHE_TTL_SECS",
                DEFAULT_CACHE_TTL_SECS,
            )?),
            cache_capacity: env_parse("POKEAPI_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?,
        })
    }
}
