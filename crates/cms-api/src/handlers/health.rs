//! Health and API index handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /
///
/// API index: name, version, and the endpoint map.
pub async fn index() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "Kim Jong-seo Memorial Foundation API",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "healthy",
            "endpoints": {
                "auth": "/api/auth/login, /api/auth/refresh (public); /api/auth/me, /api/auth/password (authenticated)",
                "menus": "/api/menus, /api/menus/tree, /api/menus/by-path/{path} (public); mutations authenticated",
                "contents": "/api/contents, /api/contents/by-menu-path/{path} (public); mutations authenticated",
                "uploads": "/api/uploads, /api/uploads/{id}/serve (public); mutations authenticated",
                "health": "/api/health"
            }
        }
    }))
}

/// GET /api/health
///
/// Liveness plus a database connectivity probe.
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let (status_code, status, database) = match state.db.health_check().await {
        Ok(true) => (StatusCode::OK, "ok", "ok".to_string()),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "degraded",
            "unexpected probe result".to_string(),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "degraded",
            e.message.clone(),
        ),
    };

    (
        status_code,
        Json(ApiResponse::ok(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            timestamp: Utc::now(),
        })),
    )
}
