//! REST API error types
//!
//! Every handler failure renders as a flat JSON body `{"error": message}`
//! with an appropriate HTTP status code. Store and auth internals are
//! logged but never put on the wire.

use gs_auth::AuthError;
use gs_core::ErrorLocation;
use gs_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or malformed request field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Request is well-formed but cannot be honored (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Authentication failed (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        // Don't expose store internals to clients
        log::error!("Store error: {}", e);

        match e {
            StoreError::DocumentNotFound { .. } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Store operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::error!("Auth error: {}", e);

        match e {
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Invalid credentials".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. }
            | AuthError::IdentityRejected { .. } => ApiError::Unauthorized {
                message: "Invalid token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::VerificationRequest { .. } => ApiError::Internal {
                message: "Identity verification failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::JwtEncode { .. } => ApiError::Internal {
                message: "Token creation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
