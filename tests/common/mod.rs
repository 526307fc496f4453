use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;

use ticketdesk::router::init_router;
use ticketdesk::state::AppState;
use ticketdesk_auth::TokenIssuer;
use ticketdesk_config::{JwtConfig, SigningSecret};
use ticketdesk_db::{InMemorySubjectStore, StoreError, SubjectStore};
use ticketdesk_models::{Role, SubjectId, SubjectRecord};

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";
pub const USER_PASSWORD: &str = "user-password";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub fn jwt_config() -> JwtConfig {
    jwt_config_with(TEST_SECRET, 3600)
}

pub fn jwt_config_with(secret: &str, lifetime_secs: u64) -> JwtConfig {
    JwtConfig::new(
        SigningSecret::new(secret).unwrap(),
        Duration::from_secs(lifetime_secs),
    )
}

pub fn subject(id: &str) -> SubjectId {
    SubjectId::new(id).unwrap()
}

pub fn subject_record(id: &str, password: &str, role: Role) -> SubjectRecord {
    SubjectRecord {
        id: subject(id),
        email: format!("{id}@example.com"),
        // Minimum cost keeps the suite fast.
        password_hash: bcrypt::hash(password, 4).unwrap(),
        role,
    }
}

/// `u1` is a user, `u2` an admin.
pub fn seeded_store() -> InMemorySubjectStore {
    [
        subject_record("u1", USER_PASSWORD, Role::User),
        subject_record("u2", ADMIN_PASSWORD, Role::Admin),
    ]
    .into_iter()
    .collect()
}

pub fn setup_test_app(store: Arc<dyn SubjectStore>) -> Router {
    init_router(AppState::new(&jwt_config(), store))
}

pub fn token_for(id: &str) -> String {
    TokenIssuer::new(&jwt_config())
        .issue(&subject(id))
        .unwrap()
        .access_token
}

pub fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Store whose every lookup fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl SubjectStore for FailingStore {
    async fn find_subject_by_id(&self, _id: &SubjectId) -> Result<Option<SubjectRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_subject_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<SubjectRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
