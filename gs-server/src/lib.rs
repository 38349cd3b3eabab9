pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{firebase_login, login},
        bearer::require_bearer,
        firebase_login_request::FirebaseLoginRequest,
        login_request::LoginRequest,
        login_response::LoginResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    inventory::{
        inventory::{list_user_inventory, redeem_item},
        inventory_entry_dto::InventoryEntryDto,
        redeem_request::RedeemRequest,
    },
    items::{
        create_item_request::CreateItemRequest,
        item_dto::ItemDto,
        items::{create_item, list_items},
    },
    users::{
        register_request::RegisterRequest,
        user_dto::UserDto,
        users::{get_user, register},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
