use axum::Json;
use axum::extract::State;
use tracing::instrument;

use ticketdesk_auth::IssuedToken;
use ticketdesk_core::AppError;
use ticketdesk_models::LoginRequest;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Login and receive a bearer token
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<IssuedToken>, AppError> {
    let token =
        AuthService::login_user(state.subjects.as_ref(), &state.token_issuer, dto).await?;
    Ok(Json(token))
}
