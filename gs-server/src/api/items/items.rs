//! Item catalog REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateItemRequest, ItemDto};

use gs_core::ErrorLocation;
use gs_store::ItemRepository;

use std::panic::Location;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/items
///
/// List all active catalog items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<ItemDto>>> {
    let repo = ItemRepository::new(state.store.clone());
    let items = repo.find_all_active().await?;

    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// POST /api/items
///
/// Create a catalog item
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> ApiResult<Json<ItemDto>> {
    if request.name.is_empty() {
        return Err(ApiError::Validation {
            message: "name is required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = ItemRepository::new(state.store.clone());
    let item = repo.create(request.into()).await?;

    Ok(Json(item.into()))
}
