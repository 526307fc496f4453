//! # Ticketdesk Auth
//!
//! Signed bearer tokens for the Ticketdesk API.
//!
//! - [`jwt::TokenIssuer`]: signs a time-bounded token for a subject
//! - [`jwt::TokenVerifier`]: checks signature and expiry, yields an [`Identity`]
//! - [`bearer`]: tolerant parsing of the `Authorization` header value
//!
//! Both issuer and verifier are built from an already resolved
//! [`JwtConfig`](ticketdesk_config::JwtConfig); neither reads the environment.
//!
//! # Example
//!
//! ```ignore
//! use ticketdesk_auth::{TokenIssuer, TokenVerifier};
//! use ticketdesk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let issuer = TokenIssuer::new(&config);
//! let verifier = TokenVerifier::new(&config);
//!
//! let token = issuer.issue(&subject_id)?;
//! let identity = verifier.verify(&token.access_token)?;
//! assert_eq!(identity.subject(), &subject_id);
//! ```

pub mod bearer;
pub mod claims;
pub mod identity;
pub mod jwt;

pub use bearer::strip_bearer;
pub use claims::Claims;
pub use identity::Identity;
pub use jwt::{IssuedToken, TokenIssuer, TokenVerifier};
