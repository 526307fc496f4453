use std::env;

use crate::error::ConfigError;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";

/// Connection settings for the PostgreSQL subject store.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: connection URL (required)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: `10`)
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVar(DATABASE_URL_VAR))?;

        let max_connections = match lookup(DATABASE_MAX_CONNECTIONS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidVar {
                    name: DATABASE_MAX_CONNECTIONS_VAR,
                    value: raw,
                })?,
            None => 10,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url() {
        let err = DatabaseConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(DATABASE_URL_VAR));
    }

    #[test]
    fn test_defaults_pool_size() {
        let config = DatabaseConfig::from_lookup(|key| {
            (key == DATABASE_URL_VAR).then(|| "postgres://localhost/ticketdesk".to_string())
        })
        .unwrap();
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_debug_hides_url() {
        let config = DatabaseConfig {
            url: "postgres://admin:hunter2@db/ticketdesk".to_string(),
            max_connections: 5,
        };
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
