//! Inventory REST API handlers
//!
//! Redemption is the only write path into a user's inventory; listing is
//! scoped per user.

use crate::{ApiError, ApiResult, AppState, InventoryEntryDto, RedeemRequest};

use gs_core::ErrorLocation;
use gs_store::InventoryRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/inventory/redeem
///
/// Redeem a code for a user, granting the matching item
pub async fn redeem_item(
    State(state): State<AppState>,
    Json(request): Json<RedeemRequest>,
) -> ApiResult<Json<InventoryEntryDto>> {
    if request.user_id <= 0 {
        return Err(ApiError::Validation {
            message: "userId is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let code = match request.redeem_code {
        Some(code) if !code.as_str().is_empty() => code,
        _ => {
            return Err(ApiError::Validation {
                message: "redeemCode is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let repo = InventoryRepository::new(state.store.clone());
    let entry = repo
        .redeem(request.user_id, &code)
        .await?
        .ok_or_else(|| ApiError::BadRequest {
            message: "Invalid redeem code".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(entry.into()))
}

/// GET /api/inventory/user/{userId}
///
/// List everything a user owns
pub async fn list_user_inventory(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<InventoryEntryDto>>> {
    let repo = InventoryRepository::new(state.store.clone());
    let entries = repo.find_by_user(user_id).await?;

    Ok(Json(entries.into_iter().map(InventoryEntryDto::from).collect()))
}
