//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `sub`, `iat` and `exp`. The lifetime is
//! fixed at issuance from [`JwtConfig::access_token_lifetime`]. Verification
//! pins the algorithm and allows no clock leeway: a token is accepted while
//! `now <= exp` and rejected afterwards.
//!
//! Every verification failure (bad signature, malformed token, expired token,
//! empty subject) is reported to the caller as the same generic
//! [`AppError::unauthorized`]. The specific cause only reaches the debug log.

use std::fmt;
use std::time::Duration;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ticketdesk_config::JwtConfig;
use ticketdesk_core::AppError;
use ticketdesk_models::SubjectId;

use crate::bearer::BEARER_SCHEME;
use crate::claims::Claims;
use crate::identity::Identity;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// A freshly signed token as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
}

/// Signs access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    lifetime: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            lifetime: config.access_token_lifetime,
        }
    }

    /// Issues a token for `subject` valid from now until now + lifetime.
    ///
    /// The caller is trusted to have verified the subject's credentials; no
    /// storage lookup happens here.
    pub fn issue(&self, subject: &SubjectId) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, Utc::now())
    }

    /// Same as [`issue`](Self::issue) with an explicit issuance time.
    pub fn issue_at(
        &self,
        subject: &SubjectId,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let iat = now.timestamp();
        let exp = i64::try_from(self.lifetime.as_secs())
            .ok()
            .and_then(|lifetime| iat.checked_add(lifetime))
            .ok_or_else(|| AppError::internal_error(anyhow!("Token expiry overflows")))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp,
        };

        let access_token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal_error(anyhow!("Failed to create token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            token_type: BEARER_SCHEME.to_string(),
            expires_in: self.lifetime.as_secs(),
        })
    }
}

/// Verifies access tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Checks signature and expiry and returns the token's subject.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = failure_reason(e.kind()), "Token verification failed");
                AppError::unauthorized()
            })?;

        let subject = SubjectId::new(claims.sub).map_err(|_| {
            debug!(reason = "empty_subject", "Token verification failed");
            AppError::unauthorized()
        })?;

        Ok(Identity::new(subject))
    }
}

fn failure_reason(kind: &ErrorKind) -> &'static str {
    match kind {
        ErrorKind::ExpiredSignature => "token_expired",
        ErrorKind::InvalidSignature => "invalid_signature",
        ErrorKind::InvalidAlgorithm => "invalid_algorithm",
        ErrorKind::MissingRequiredClaim(_) => "missing_claim",
        _ => "invalid_token",
    }
}
