use crate::ApiError;

use fb_auth::AuthError;
use fb_core::{CoreError, StoreError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn into_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_credential_returns_401_with_generic_message() {
    let error = ApiError::from(AuthError::InvalidCredential { location: here() });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_expired_token_returns_401_with_token_expired_code() {
    let error = ApiError::from(AuthError::TokenExpired { location: here() });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_malformed_token_returns_401_without_decoder_detail() {
    let error = ApiError::from(AuthError::MalformedToken {
        message: "InvalidSignature".into(),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    assert!(!json["error"]["message"].as_str().unwrap().contains("InvalidSignature"));
}

#[tokio::test]
async fn test_duplicate_email_returns_409_with_email_field() {
    let error = ApiError::from(AuthError::DuplicateEmail {
        email: "alice@example.com".into(),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_invalid_input_returns_400_with_field() {
    let error = ApiError::from(AuthError::InvalidInput {
        field: "password",
        message: "password must be at least 8 characters".into(),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_not_found_returns_404_without_field() {
    let error = ApiError::from(AuthError::NotFound {
        message: "User not found".into(),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 10,
        window_secs: 60,
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_persistence_failure_returns_500_without_details() {
    let error = ApiError::from(AuthError::Persistence {
        source: StoreError::Unavailable {
            message: "disk I/O error at /var/lib/fitbuddy.db".into(),
            location: here(),
        },
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn test_unknown_provider_returns_400_with_provider_field() {
    let error = ApiError::from(CoreError::UnknownProvider {
        value: "myspace".into(),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "provider");
    assert_eq!(json["error"]["message"], "Unknown identity provider: myspace");
}
