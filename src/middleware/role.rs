//! Authorization Gate.
//!
//! Runs strictly after the Authentication Gate. It never looks at the token
//! again; it reads the subject's current role from storage and compares it to
//! the route's required role. Three outcomes besides success:
//!
//! - no identity on the request: 401 (the gates were wired in the wrong order)
//! - subject record missing or unreadable: 500
//! - role mismatch: 403

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};

use ticketdesk_auth::Identity;
use ticketdesk_core::AppError;
use ticketdesk_db::SubjectStore;
use ticketdesk_models::Role;

use crate::state::AppState;

/// Checks that the authenticated subject holds exactly `required`.
///
/// The store lookup is the only suspension point; it is neither retried nor
/// timed out here.
pub async fn authorize(
    identity: Option<&Identity>,
    required: Role,
    store: &dyn SubjectStore,
) -> Result<(), AppError> {
    let Some(identity) = identity else {
        error!(
            required_role = %required,
            "Authorization gate reached without an authenticated identity"
        );
        return Err(AppError::unauthorized());
    };

    let subject = identity.subject();
    let record = match store.find_subject_by_id(subject).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Err(AppError::internal_error(anyhow!(
                "Authenticated subject {subject} has no record"
            )));
        }
        Err(e) => {
            return Err(AppError::internal_error(
                anyhow::Error::new(e).context(format!("Failed to look up subject {subject}")),
            ));
        }
    };

    if record.role != required {
        warn!(
            subject = %subject,
            required_role = %required,
            actual_role = %record.role,
            "Access denied"
        );
        return Err(AppError::forbidden(format!(
            "Access denied. Required role: {required}"
        )));
    }

    debug!(subject = %subject, role = %required, "Request authorized");
    Ok(())
}

/// Middleware running [`authorize`] against the identity left by
/// [`require_auth`](crate::middleware::auth::require_auth).
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/reports", get(reports_handler))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| require_role(state, req, next, Role::Admin),
///     ))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    required: Role,
) -> Result<Response, AppError> {
    let identity = req.extensions().get::<Identity>().cloned();
    authorize(identity.as_ref(), required, state.subjects.as_ref()).await?;

    Ok(next.run(req).await)
}

/// Admin-only routes.
///
/// ```rust,ignore
/// let admin_routes = init_admin_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_admin(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, req, next, Role::Admin).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use ticketdesk_db::InMemorySubjectStore;
    use ticketdesk_models::{SubjectId, SubjectRecord};

    fn identity(id: &str) -> Identity {
        Identity::new(SubjectId::new(id).unwrap())
    }

    fn store() -> InMemorySubjectStore {
        [("u1", Role::User), ("u2", Role::Admin)]
            .into_iter()
            .map(|(id, role)| SubjectRecord {
                id: SubjectId::new(id).unwrap(),
                email: format!("{id}@example.com"),
                password_hash: String::new(),
                role,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_matching_role_allowed() {
        let store = store();
        assert!(authorize(Some(&identity("u2")), Role::Admin, &store).await.is_ok());
        assert!(authorize(Some(&identity("u1")), Role::User, &store).await.is_ok());
    }

    #[tokio::test]
    async fn test_role_mismatch_forbidden() {
        let store = store();
        let err = authorize(Some(&identity("u1")), Role::Admin, &store)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);

        // Exact match only: an admin is not a user.
        let err = authorize(Some(&identity("u2")), Role::User, &store)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_identity_unauthorized() {
        let err = authorize(None, Role::Admin, &store()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_subject_internal_error() {
        let err = authorize(Some(&identity("ghost")), Role::Admin, &store())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
