use crate::tests::create_test_state;
use crate::{ApiError, AuthenticatedUser};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

async fn extract(header: Option<&str>) -> Result<AuthenticatedUser, ApiError> {
    let state = create_test_state().await;
    extract_with(&state, header).await
}

async fn extract_with(
    state: &crate::AppState,
    header: Option<&str>,
) -> Result<AuthenticatedUser, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    AuthenticatedUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let session = state.auth.issuer().issue(user_id).unwrap();

    let result = extract_with(&state, Some(&format!("Bearer {}", session.token))).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn test_extractor_without_header_is_missing_token() {
    let result = extract(None).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_TOKEN",
            ..
        })
    ));
}

#[tokio::test]
async fn test_extractor_with_wrong_scheme_is_invalid_token() {
    let result = extract(Some("Basic dXNlcjpwYXNz")).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_TOKEN",
            ..
        })
    ));
}

#[tokio::test]
async fn test_extractor_with_empty_bearer_is_invalid_token() {
    let result = extract(Some("Bearer   ")).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_TOKEN",
            ..
        })
    ));
}

#[tokio::test]
async fn test_extractor_with_garbage_token_is_unauthorized() {
    let result = extract(Some("Bearer not.a.jwt")).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_TOKEN",
            ..
        })
    ));
}
