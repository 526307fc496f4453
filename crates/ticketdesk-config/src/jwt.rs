//! Signing secret provisioning and token lifetime configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HS256 signing secret (required, no default)
//! - `JWT_ACCESS_EXPIRY`: token lifetime as a duration string (default: `1h`)
//!
//! Lifetimes are either bare seconds (`"3600"`) or a whole number followed by
//! one unit: `s`, `m`, `h` or `d` (`"15m"`, `"1h"`, `"7d"`).

use std::env;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::error::ConfigError;

pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const JWT_ACCESS_EXPIRY_VAR: &str = "JWT_ACCESS_EXPIRY";

/// Token lifetime used when `JWT_ACCESS_EXPIRY` is unset.
pub const DEFAULT_ACCESS_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// Longest accepted lifetime. Keeps `iat + lifetime` inside a JWT timestamp.
pub const MAX_ACCESS_TOKEN_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

static SIGNING_SECRET: OnceLock<SigningSecret> = OnceLock::new();

/// The process-wide HMAC key. Cheap to clone, never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Arc<[u8]>);

impl SigningSecret {
    /// Rejects empty and whitespace-only secrets.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let bytes = secret.as_ref();
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ConfigError::MissingSecret);
        }

        Ok(Self(Arc::from(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Resolves the signing secret from `JWT_SECRET`.
///
/// The first successful resolution is cached for the lifetime of the process;
/// the secret cannot change without a restart. A failed resolution is not
/// cached, so every caller that tries to issue or verify without a secret gets
/// [`ConfigError::MissingSecret`].
pub fn resolve_signing_secret() -> Result<SigningSecret, ConfigError> {
    if let Some(secret) = SIGNING_SECRET.get() {
        return Ok(secret.clone());
    }

    let secret = signing_secret_from(|key| env::var(key).ok())?;
    Ok(SIGNING_SECRET.get_or_init(|| secret).clone())
}

/// Reads the secret through an arbitrary lookup, bypassing the process cache.
pub fn signing_secret_from<F>(lookup: F) -> Result<SigningSecret, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(JWT_SECRET_VAR).ok_or(ConfigError::MissingSecret)?;
    SigningSecret::new(raw)
}

/// Parses a token lifetime such as `"3600"`, `"15m"` or `"7d"`.
pub fn parse_lifetime(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason| ConfigError::InvalidLifetime {
        value: value.to_string(),
        reason,
    };

    let trimmed = value.trim();
    let (amount, unit) = match trimmed.char_indices().last() {
        None => return Err(invalid("empty value")),
        Some((idx, c)) if c.is_ascii_alphabetic() => (&trimmed[..idx], c),
        Some(_) => (trimmed, 's'),
    };

    let seconds_per_unit: u64 = match unit {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        _ => return Err(invalid("unknown unit, expected one of s, m, h, d")),
    };

    let amount: u64 = amount
        .parse()
        .map_err(|_| invalid("expected a positive whole number"))?;
    if amount == 0 {
        return Err(invalid("must be greater than zero"));
    }

    amount
        .checked_mul(seconds_per_unit)
        .map(Duration::from_secs)
        .filter(|lifetime| *lifetime <= MAX_ACCESS_TOKEN_LIFETIME)
        .ok_or_else(|| invalid("too large"))
}

/// JWT settings shared by the token issuer and verifier.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: SigningSecret,
    pub access_token_lifetime: Duration,
}

impl JwtConfig {
    pub fn new(secret: SigningSecret, access_token_lifetime: Duration) -> Self {
        Self {
            secret,
            access_token_lifetime,
        }
    }

    /// Loads the config from the process environment. The secret goes through
    /// [`resolve_signing_secret`] and is therefore cached.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: resolve_signing_secret()?,
            access_token_lifetime: lifetime_from(|key| env::var(key).ok())?,
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            secret: signing_secret_from(&lookup)?,
            access_token_lifetime: lifetime_from(&lookup)?,
        })
    }
}

fn lifetime_from<F>(lookup: F) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(JWT_ACCESS_EXPIRY_VAR) {
        Some(raw) => parse_lifetime(&raw),
        None => Ok(DEFAULT_ACCESS_TOKEN_LIFETIME),
    }
}
