//! Host configuration parsed from environment variables.
//!
//! The bind address comes from the Leptos `site-addr` setting; `HOST` and
//! `PORT` replace only the part they name, and only when set.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    /// Overrides the Leptos `site-root` holding the `pkg/` bundle.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind IP, replacing the one in `site-addr`
    /// - `PORT`: bind port, replacing the one in `site-addr`
    /// - `SITE_ROOT`: directory containing the built `pkg/` assets
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_set("HOST", lookup("HOST"))?;
        let port = parse_set("PORT", lookup("PORT"))?;
        let site_root = lookup("SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    /// `configured` with any `HOST`/`PORT` override applied.
    #[must_use]
    pub fn site_addr(&self, configured: SocketAddr) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(configured.ip()), self.port.unwrap_or(configured.port()))
    }
}

/// Blank counts as unset.
fn parse_set<T: std::str::FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    raw.trim().parse().map(Some).map_err(|_| ConfigError::Invalid { var, value: raw })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
