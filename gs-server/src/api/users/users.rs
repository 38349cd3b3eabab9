//! User directory REST API handlers

use crate::{ApiError, ApiResult, AppState, RegisterRequest, UserDto};

use gs_core::ErrorLocation;
use gs_store::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/users/register
///
/// Create an account with an allocated sequential id
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<UserDto>> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation {
            message: "email and password are required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.store.clone());
    let user = repo.create(request.into()).await?;

    Ok(Json(user.into()))
}

/// GET /api/users/{id}
///
/// Get a single account by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserDto>> {
    let repo = UserRepository::new(state.store.clone());
    let user = repo.find_by_id(id).await?.ok_or_else(|| ApiError::NotFound {
        message: format!("User {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Json(user.into()))
}
