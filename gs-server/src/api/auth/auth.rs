//! Login handlers
//!
//! Password login checks the stored password directly; firebase login
//! trades an externally verified identity token for a local account,
//! creating the account on first sight. Both return the same response
//! shape: the account plus a freshly issued bearer token.

use crate::{ApiError, ApiResult, AppState, FirebaseLoginRequest, LoginRequest, LoginResponse};

use gs_auth::password_matches;
use gs_core::ErrorLocation;
use gs_store::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/login
///
/// Password login for an existing account
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation {
            message: "email and password are required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.store.clone());
    let user = repo
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Invalid credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    // Externally-authenticated accounts never match a supplied password,
    // including the sentinel value itself.
    if !password_matches(&user, &request.password) {
        return Err(ApiError::Unauthorized {
            message: "Invalid credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.tokens.issue(&user)?;

    Ok(Json(LoginResponse {
        user: user.into(),
        token,
    }))
}

/// POST /api/auth/firebase-login
///
/// Exchange an externally verified identity token for a local session,
/// creating the account on first login
pub async fn firebase_login(
    State(state): State<AppState>,
    Json(request): Json<FirebaseLoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if request.token.is_empty() {
        return Err(ApiError::Validation {
            message: "token is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let identity = state.verifier.verify(&request.token).await?;

    let repo = UserRepository::new(state.store.clone());
    let user = match repo.find_by_email(&identity.email).await? {
        Some(user) => user,
        None => repo.create_from_external_identity(&identity.email).await?,
    };

    let token = state.tokens.issue(&user)?;

    Ok(Json(LoginResponse {
        user: user.into(),
        token,
    }))
}
