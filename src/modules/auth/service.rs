use tracing::{debug, info};

use ticketdesk_auth::{IssuedToken, TokenIssuer};
use ticketdesk_core::{AppError, verify_password};
use ticketdesk_db::SubjectStore;
use ticketdesk_models::LoginRequest;

pub struct AuthService;

impl AuthService {
    /// Checks email and password, then issues an access token.
    ///
    /// Unknown email and wrong password produce the same 401.
    pub async fn login_user(
        store: &dyn SubjectStore,
        issuer: &TokenIssuer,
        dto: LoginRequest,
    ) -> Result<IssuedToken, AppError> {
        let Some(subject) = store.find_subject_by_email(&dto.email).await? else {
            debug!(reason = "unknown_email", "Login rejected");
            return Err(AppError::unauthorized());
        };

        if !verify_password(&dto.password, &subject.password_hash)? {
            debug!(reason = "wrong_password", subject = %subject.id, "Login rejected");
            return Err(AppError::unauthorized());
        }

        let token = issuer.issue(&subject.id)?;
        info!(subject = %subject.id, "Access token issued");

        Ok(token)
    }
}
