use crate::{
    AppState, create_item, firebase_login, get_user, health, list_items, list_user_inventory,
    login, redeem_item, register, require_bearer,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Everything under /api except the two login endpoints requires a
    // valid bearer token
    let protected = Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/{id}", get(get_user))
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/inventory/redeem", post(redeem_item))
        .route("/api/inventory/user/{user_id}", get(list_user_inventory))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Login endpoints issue the tokens the protected routes require
        .route("/api/auth/login", post(login))
        .route("/api/auth/firebase-login", post(firebase_login))
        .merge(protected)
        // Add shared state
        .with_state(state)
        // CORS middleware (the game client is browser-hosted)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
