use anyhow::anyhow;
use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use ticketdesk_core::AppError;
use ticketdesk_models::{SubjectId, UserProfile};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Profile of the authenticated caller
#[instrument(skip_all)]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let record = state
        .subjects
        .find_subject_by_id(identity.subject())
        .await?
        .ok_or_else(|| {
            AppError::internal_error(anyhow!(
                "Authenticated subject {} has no record",
                identity.subject()
            ))
        })?;

    Ok(Json(UserProfile::from(&record)))
}

/// Any subject's profile; mounted behind the admin gate
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let not_found = || AppError::not_found("User not found");
    let id = SubjectId::new(id).map_err(|_| not_found())?;

    let record = state
        .subjects
        .find_subject_by_id(&id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(UserProfile::from(&record)))
}
