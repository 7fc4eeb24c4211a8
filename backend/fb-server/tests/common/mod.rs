#![allow(dead_code)]

//! Test infrastructure for fb-server API tests

use fb_auth::{AuthService, AuthSettings, RateLimitConfig, SessionConfig};
use fb_db::{UserRepository, connect_in_memory};
use fb_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Create AppState for testing over an in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_rate_limit(RateLimitConfig::default()).await
}

pub async fn create_test_app_state_with_rate_limit(rate_limit: RateLimitConfig) -> AppState {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");

    let mut settings = AuthSettings::new(SessionConfig::with_default_ttl(TEST_SECRET));
    settings.bcrypt_cost = 4;
    settings.rate_limit = rate_limit;

    let auth = AuthService::new(Arc::new(UserRepository::new(pool.clone())), settings)
        .expect("Failed to create auth service");

    AppState::new(auth, pool)
}

/// Send one request through a fresh router and decode the JSON body (Null if empty)
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Register through the API and return the new user's id
pub async fn register_user(state: &AppState, name: &str, email: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": name, "email": email, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);

    json["user"]["id"].as_str().unwrap().to_string()
}

/// Log in through the API and return the bearer token
pub async fn login_user(state: &AppState, email: &str) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", json);

    json["token"].as_str().unwrap().to_string()
}

/// Register, log in and set matching attributes; returns (user_id, token)
pub async fn create_member(
    state: &AppState,
    name: &str,
    preferences: &[&str],
    goal: &str,
) -> (String, String) {
    let email = format!("{}@example.com", name.to_lowercase());
    let user_id = register_user(state, name, &email).await;
    let token = login_user(state, &email).await;

    let (status, json) = send(
        state,
        "PUT",
        "/api/profile",
        Some(&token),
        Some(json!({ "preferences": preferences, "goal": goal })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "profile update failed: {}", json);

    (user_id, token)
}
