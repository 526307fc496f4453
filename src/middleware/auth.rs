//! Authentication Gate.
//!
//! [`authenticate`] is the gate itself: a pure function from the raw
//! `Authorization` value to an [`Identity`]. [`require_auth`] adapts it to an
//! axum middleware and [`AuthUser`] hands the identity to handlers.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

use ticketdesk_auth::{Identity, TokenVerifier, strip_bearer};
use ticketdesk_core::AppError;

use crate::state::AppState;

/// Verifies a presented credential.
///
/// An absent credential is rejected before any cryptographic work. Every
/// failure yields the same [`AppError::unauthorized`]; storage is never
/// touched.
pub fn authenticate(
    credential: Option<&str>,
    verifier: &TokenVerifier,
) -> Result<Identity, AppError> {
    let Some(raw) = credential else {
        debug!(reason = "missing_credential", "Authentication failed");
        return Err(AppError::unauthorized());
    };

    let token = strip_bearer(raw).ok_or_else(|| {
        debug!(reason = "empty_token", "Authentication failed");
        AppError::unauthorized()
    })?;

    verifier.verify(token)
}

/// Middleware running [`authenticate`] on the `Authorization` header.
///
/// On success the [`Identity`] is stored in the request extensions for the
/// rest of this request only.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/me", get(get_me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credential = match req.headers().get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(value.to_str().map_err(|_| {
            debug!(reason = "non_ascii_header", "Authentication failed");
            AppError::unauthorized()
        })?),
    };

    let identity = authenticate(credential, &state.token_verifier)?;
    debug!(subject = %identity.subject(), "Request authenticated");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extractor for the identity attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                error!("AuthUser extracted on a route without require_auth");
                AppError::unauthorized()
            })
    }
}
