//! JWT claim set for access tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by every access token.
///
/// Only the subject is identity-bearing. Roles are deliberately absent: the
/// authorization gate reads them from storage on each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
