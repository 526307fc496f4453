use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const SERVER_ADDR_VAR: &str = "SERVER_ADDR";
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

/// HTTP listener settings.
///
/// # Environment Variables
///
/// - `SERVER_ADDR`: socket address to bind (default: `0.0.0.0:3000`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(SERVER_ADDR_VAR).unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let bind_addr: SocketAddr = raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
            name: SERVER_ADDR_VAR,
            value: raw.clone(),
        })?;

        Ok(Self { bind_addr })
    }
}
