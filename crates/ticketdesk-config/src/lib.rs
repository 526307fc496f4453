//! # Ticketdesk Config
//!
//! Configuration types for the Ticketdesk API, loaded from environment
//! variables:
//!
//! - [`jwt`]: signing secret and token lifetime
//! - [`server`]: listen address
//! - [`database`]: subject store connection settings
//!
//! Every loader returns a [`ConfigError`] instead of falling back to an unsafe
//! default. A missing signing secret is fatal: no token could ever be signed
//! or verified without it.
//!
//! # Example
//!
//! ```ignore
//! use ticketdesk_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{
    JwtConfig, MAX_ACCESS_TOKEN_LIFETIME, SigningSecret, parse_lifetime, resolve_signing_secret,
};
pub use server::ServerConfig;
