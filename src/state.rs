use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use ticketdesk_auth::{TokenIssuer, TokenVerifier};
use ticketdesk_config::{DatabaseConfig, JwtConfig};
use ticketdesk_db::{PgSubjectStore, SubjectStore};

/// Shared, read-only state handed to every request.
///
/// Everything in here is immutable after startup, so no request ever waits on
/// another for it.
#[derive(Clone)]
pub struct AppState {
    pub token_issuer: Arc<TokenIssuer>,
    pub token_verifier: Arc<TokenVerifier>,
    pub subjects: Arc<dyn SubjectStore>,
}

impl AppState {
    pub fn new(jwt_config: &JwtConfig, subjects: Arc<dyn SubjectStore>) -> Self {
        Self {
            token_issuer: Arc::new(TokenIssuer::new(jwt_config)),
            token_verifier: Arc::new(TokenVerifier::new(jwt_config)),
            subjects,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("token_issuer", &self.token_issuer)
            .field("token_verifier", &self.token_verifier)
            .finish_non_exhaustive()
    }
}

/// Builds the production state from the environment.
///
/// Fails when the signing secret is missing or any other setting is invalid;
/// the server must not start in that case.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    let database_config = DatabaseConfig::from_env().context("Invalid database configuration")?;

    let store = PgSubjectStore::connect(&database_config)
        .await
        .context("Failed to connect to database")?;
    store.migrate().await.context("Failed to run migrations")?;

    info!(
        token_lifetime_secs = jwt_config.access_token_lifetime.as_secs(),
        "Application state initialized"
    );

    Ok(AppState::new(&jwt_config, Arc::new(store)))
}
