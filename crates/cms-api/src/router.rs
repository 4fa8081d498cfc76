//! Route definitions for the CMS HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor. Handlers that take the `AuthUser` extractor
//! require a valid bearer token; everything else is public.

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Multipart bodies carry some framing overhead beyond the file itself.
    let body_limit = state.config.storage.max_upload_size_bytes as usize + 64 * 1024;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(menu_routes())
        .merge(content_routes())
        .merge(upload_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::index))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, refresh, profile, password change.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/password", put(handlers::auth::change_password))
}

/// Menu CRUD, tree, and path resolution.
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menus", get(handlers::menu::list))
        .route("/menus", post(handlers::menu::create))
        .route("/menus/tree", get(handlers::menu::tree))
        .route("/menus/by-url/{url}", get(handlers::menu::by_url))
        .route("/menus/by-path/{*path}", get(handlers::menu::by_path))
        .route("/menus/sort-order", patch(handlers::menu::update_sort_order))
        .route("/menus/reorder", put(handlers::menu::reorder))
        .route("/menus/seed", post(handlers::menu::seed))
        .route("/menus/{id}", get(handlers::menu::get))
        .route("/menus/{id}", put(handlers::menu::update))
        .route("/menus/{id}", delete(handlers::menu::remove))
}

/// Content listing, menu-scoped resolution, and CRUD.
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/contents", get(handlers::content::list))
        .route("/contents", post(handlers::content::create))
        .route(
            "/contents/by-menu-path/{*path}",
            get(handlers::content::by_menu_path),
        )
        .route(
            "/contents/by-menu/{url}",
            get(handlers::content::by_menu_url),
        )
        .route(
            "/contents/sort-order",
            patch(handlers::content::update_sort_order),
        )
        .route("/contents/{id}", get(handlers::content::get))
        .route("/contents/{id}/view", get(handlers::content::view))
        .route("/contents/{id}", put(handlers::content::update))
        .route("/contents/{id}", delete(handlers::content::remove))
}

/// Upload intake, listing, serving, and deletion.
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads", post(handlers::upload::upload_single))
        .route("/uploads", get(handlers::upload::list))
        .route("/uploads/batch", post(handlers::upload::upload_batch))
        .route("/uploads/stats", get(handlers::upload::stats))
        .route(
            "/uploads/content/{content_id}",
            get(handlers::upload::by_content),
        )
        .route("/uploads/{id}", get(handlers::upload::get))
        .route("/uploads/{id}/serve", get(handlers::upload::serve))
        .route("/uploads/{id}/download", get(handlers::upload::download))
        .route("/uploads/{id}", delete(handlers::upload::remove))
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
