//! Integration tests for the item catalog API handlers
mod common;

use crate::common::{bearer_for, create_test_account, create_test_app_state, create_test_item};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use gs_server::routes::build_router;

#[tokio::test]
async fn test_list_items_empty() {
    let state = create_test_app_state();
    let user = create_test_account(&state, "player@example.com", "hunter2").await;
    let bearer = bearer_for(&state, &user);

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/items")
        .header("Authorization", bearer)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 0);
}

#[tokio::test]
async fn test_create_item_returns_item_with_assigned_id() {
    let state = create_test_app_state();
    let user = create_test_account(&state, "player@example.com", "hunter2").await;
    let bearer = bearer_for(&state, &user);

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("Content-Type", "application/json")
        .header("Authorization", bearer)
        .body(Body::from(
            json!({
                "name": "Iron Sword",
                "description": "A basic sword",
                "category": "weapon",
                "rarity": "common",
                "value": 100,
                "redeemCode": "sword01",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["name"], "Iron Sword");
    // Codes normalize to uppercase at the boundary
    assert_eq!(json["redeemCode"], "SWORD01");
    // Unspecified active defaults to true
    assert_eq!(json["active"], true);
}

#[tokio::test]
async fn test_list_items_returns_active_only() {
    let state = create_test_app_state();
    let user = create_test_account(&state, "player@example.com", "hunter2").await;
    let bearer = bearer_for(&state, &user);
    create_test_item(&state, "Iron Sword", "SWORD01").await;

    // Retired item should stay out of the listing
    let app = build_router(state.clone());
    let request = Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("Content-Type", "application/json")
        .header("Authorization", bearer.clone())
        .body(Body::from(
            json!({
                "name": "Retired Shield",
                "value": 50,
                "redeemCode": "SHIELD01",
                "active": false,
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/items")
        .header("Authorization", bearer)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Iron Sword");
}

#[tokio::test]
async fn test_create_item_missing_name_returns_400() {
    let state = create_test_app_state();
    let user = create_test_account(&state, "player@example.com", "hunter2").await;
    let bearer = bearer_for(&state, &user);

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("Content-Type", "application/json")
        .header("Authorization", bearer)
        .body(Body::from(
            json!({
                "value": 100,
                "redeemCode": "SWORD01",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "name is required");
}

#[tokio::test]
async fn test_list_items_without_bearer_returns_bare_401() {
    let state = create_test_app_state();

    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/items")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}
