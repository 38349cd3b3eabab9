//! Bearer-token middleware for the protected API routes.
//!
//! Rejections are a bare 401 with no body; the flat `{"error": ...}`
//! shape is reserved for handler-level failures.

use crate::AppState;

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Require a valid `Authorization: Bearer <token>` header
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        log::warn!(
            "Missing bearer token: {} {}",
            request.method(),
            request.uri().path()
        );
        return StatusCode::UNAUTHORIZED.into_response();
    };

    if let Err(e) = state.tokens.validate(token) {
        log::warn!(
            "Rejected bearer token on {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        );
        return StatusCode::UNAUTHORIZED.into_response();
    }

    next.run(request).await
}
