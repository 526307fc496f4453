//! Operator commands used by the `ticketdesk-cli` binary.

use anyhow::Context;

use ticketdesk_auth::{IssuedToken, TokenIssuer};
use ticketdesk_config::JwtConfig;
use ticketdesk_core::hash_password;
use ticketdesk_models::SubjectId;

/// Issues a token for `subject` without any credential check. Meant for
/// operators and smoke tests, never exposed over HTTP.
pub fn issue_token(config: &JwtConfig, subject: &str) -> anyhow::Result<IssuedToken> {
    let subject = SubjectId::new(subject).context("Invalid subject id")?;
    let token = TokenIssuer::new(config)
        .issue(&subject)
        .map_err(|e| e.error)?;
    Ok(token)
}

/// Produces a bcrypt hash suitable for the `users.password_hash` column.
pub fn password_hash(password: &str) -> anyhow::Result<String> {
    anyhow::ensure!(!password.is_empty(), "Password must not be empty");
    hash_password(password).map_err(|e| e.error)
}
