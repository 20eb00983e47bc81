//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so deployment settings are
//! baked in from the build environment:
//! - `CONCEPTDAY_API_BASE_URL`: backend base URL (default `http://localhost:8000`)
//! - `CONCEPTDAY_TYPEWRITER_DELAY_MS`: per-character reveal delay (default 20)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TYPEWRITER_DELAY_MS: u64 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub typewriter_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CONCEPTDAY_API_BASE_URL"),
            option_env!("CONCEPTDAY_TYPEWRITER_DELAY_MS"),
        )
    }

    fn from_values(api_base_url: Option<&str>, typewriter_delay_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let delay_ms = typewriter_delay_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TYPEWRITER_DELAY_MS);
        Self { api_base_url, typewriter_delay: Duration::from_millis(delay_ms) }
    }
}
