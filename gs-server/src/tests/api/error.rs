use crate::ApiError;

use gs_auth::AuthError;
use gs_core::ErrorLocation;
use gs_store::StoreError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User 42 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "User 42 not found");
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::Validation {
        message: "email and password are required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "email and password are required");
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let error = ApiError::BadRequest {
        message: "Invalid redeem code".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Invalid redeem code");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Invalid credentials".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Store operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Store operation failed");
}

#[test]
fn test_store_document_not_found_converts_to_not_found() {
    let store_error = StoreError::DocumentNotFound {
        collection: "users".into(),
        id: "42".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = store_error.into();

    // The store detail stays out of the client-facing message
    assert!(matches!(
        api_error,
        ApiError::NotFound { ref message, .. } if message == "Resource not found"
    ));
}

#[test]
fn test_store_conflict_converts_to_internal() {
    let store_error = StoreError::TransactionConflict {
        attempts: 10,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = store_error.into();

    assert!(matches!(
        api_error,
        ApiError::Internal { ref message, .. } if message == "Store operation failed"
    ));
}

#[test]
fn test_auth_invalid_credentials_converts_to_unauthorized() {
    let api_error: ApiError = AuthError::invalid_credentials().into();

    assert!(matches!(
        api_error,
        ApiError::Unauthorized { ref message, .. } if message == "Invalid credentials"
    ));
}

#[test]
fn test_auth_identity_rejected_converts_to_unauthorized() {
    let auth_error = AuthError::IdentityRejected {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = auth_error.into();

    assert!(matches!(
        api_error,
        ApiError::Unauthorized { ref message, .. } if message == "Invalid token"
    ));
}

#[test]
fn test_auth_token_expired_converts_to_unauthorized() {
    let auth_error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error: ApiError = auth_error.into();

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}
