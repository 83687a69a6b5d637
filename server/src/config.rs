//! Server configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first (see `main`), so
//! these lookups see its values unless the real environment overrides them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5173;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `HOST` is not an IP address.
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },

    /// `PORT` is not a valid port number.
    #[error("invalid PORT {value:?}: expected 0-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Overrides the Leptos site root (where `/pkg` is served from).
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `5173`
    /// - `SITE_ROOT`: default from the Leptos build metadata
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = parse_host(get("HOST").as_deref())?;
        let port = parse_port(get("PORT").as_deref())?;
        let site_root = get("SITE_ROOT");

        Ok(Self { addr: SocketAddr::new(host, port), site_root })
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.unwrap_or(DEFAULT_HOST);
    value.parse().map_err(|_| ConfigError::InvalidHost { value: value.to_owned() })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
