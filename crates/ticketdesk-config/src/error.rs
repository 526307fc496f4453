use thiserror::Error;

/// Fatal configuration problems. These abort startup; they are never turned
/// into per-request responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    #[error("invalid token lifetime {value:?}: {reason}")]
    InvalidLifetime { value: String, reason: &'static str },

    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}
