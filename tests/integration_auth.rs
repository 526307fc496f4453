#[allow(dead_code)]
mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::json;
use tower::ServiceExt;

use common::{
    ADMIN_PASSWORD, FailingStore, USER_PASSWORD, body_json, get, jwt_config, jwt_config_with,
    seeded_store, setup_test_app, subject, token_for,
};
use ticketdesk_auth::TokenIssuer;

fn login_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app.oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_issued_token_authenticates() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let header = format!("Bearer {}", token_for("u1"));

    let response = app
        .oneshot(get("/api/users/me", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "u1");
    assert_eq!(body["role"], "user");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_token_without_bearer_prefix_accepted() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let token = token_for("u1");

    let response = app
        .oneshot(get("/api/users/me", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_garbage_token_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app
        .oneshot(get("/api/users/me", Some("Bearer garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
}

#[tokio::test]
async fn test_missing_header_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app.oneshot(get("/api/users/me", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
}

#[tokio::test]
async fn test_non_ascii_header_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let mut request = get("/api/users/me", None);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let expired = TokenIssuer::new(&jwt_config())
        .issue_at(&subject("u1"), Utc::now() - Duration::seconds(3601))
        .unwrap();
    let header = format!("Bearer {}", expired.access_token);

    let response = app
        .oneshot(get("/api/users/me", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let forged = TokenIssuer::new(&jwt_config_with("attacker-controlled-secret", 3600))
        .issue(&subject("u2"))
        .unwrap();
    let header = format!("Bearer {}", forged.access_token);

    let response = app
        .oneshot(get("/api/admin/users/u1", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_on_admin_route_forbidden() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let header = format!("Bearer {}", token_for("u1"));

    let response = app
        .oneshot(get("/api/admin/users/u2", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "Access denied. Required role: admin"
    );
}

#[tokio::test]
async fn test_admin_on_admin_route_allowed() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let header = format!("Bearer {}", token_for("u2"));

    let response = app
        .oneshot(get("/api/admin/users/u1", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "u1");
    assert_eq!(body["email"], "u1@example.com");
}

#[tokio::test]
async fn test_admin_lookup_of_unknown_user_not_found() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let header = format!("Bearer {}", token_for("u2"));

    let response = app
        .oneshot(get("/api/admin/users/nobody", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_during_authorization_is_internal_error() {
    let app = setup_test_app(Arc::new(FailingStore));
    let header = format!("Bearer {}", token_for("u2"));

    let response = app
        .oneshot(get("/api/admin/users/u1", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_unknown_subject_during_authorization_is_internal_error() {
    let app = setup_test_app(Arc::new(seeded_store()));
    let header = format!("Bearer {}", token_for("ghost"));

    let response = app
        .oneshot(get("/api/admin/users/u1", Some(&header)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_authentication_runs_before_authorization() {
    // The failing store would turn any authorization attempt into a 500.
    let app = setup_test_app(Arc::new(FailingStore));

    let response = app
        .oneshot(get("/api/admin/users/u1", Some("Bearer garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_success_returns_usable_token() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app
        .clone()
        .oneshot(login_request(json!({
            "email": "u2@example.com",
            "password": ADMIN_PASSWORD
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);

    let header = format!("Bearer {}", body["access_token"].as_str().unwrap());
    let response = app
        .oneshot(get("/api/admin/users/u1", Some(&header)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app
        .oneshot(login_request(json!({
            "email": "u1@example.com",
            "password": ADMIN_PASSWORD
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Unauthorized");
}

#[tokio::test]
async fn test_login_unknown_email_unauthorized() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app
        .oneshot(login_request(json!({
            "email": "nobody@example.com",
            "password": USER_PASSWORD
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validation() {
    let app = setup_test_app(Arc::new(seeded_store()));

    let response = app
        .clone()
        .oneshot(login_request(json!({
            "email": "not-an-email",
            "password": USER_PASSWORD
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .oneshot(login_request(json!({ "email": "u1@example.com" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "password is required");
}

#[tokio::test]
async fn test_login_store_failure_is_internal_error() {
    let app = setup_test_app(Arc::new(FailingStore));

    let response = app
        .oneshot(login_request(json!({
            "email": "u1@example.com",
            "password": USER_PASSWORD
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
