//! Menu CRUD, tree, and path resolution handlers.

use axum::extract::{Path, State};
use axum::Json;

use cms_database::repositories::menu::MenuReorder;
use cms_entity::menu::model::{Menu, UpdateMenu};
use cms_entity::menu::tree::MenuTreeNode;
use cms_service::menu::service::{CreateMenuRequest, SortOrderUpdate};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/menus
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateMenuRequest>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.create(req).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// GET /api/menus
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Menu>>>, ApiError> {
    let menus = state.menu_service.find_all().await?;
    Ok(Json(ApiResponse::ok(menus)))
}

/// GET /api/menus/tree
pub async fn tree(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuTreeNode>>>, ApiError> {
    let forest = state.tree_service.get_tree().await?;
    Ok(Json(ApiResponse::ok(forest)))
}

/// GET /api/menus/by-url/{url}
pub async fn by_url(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.find_by_url(&url).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// GET /api/menus/by-path/{*path}
///
/// Supports nested paths like `about-general/life`.
pub async fn by_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.tree_service.resolve_path(&path).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// GET /api/menus/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.find_one(id).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// PUT /api/menus/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateMenu>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menu_service.update(id, patch).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// DELETE /api/menus/{id}
pub async fn remove(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.menu_service.remove(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Menu {id} deleted"),
    })))
}

/// PATCH /api/menus/sort-order
pub async fn update_sort_order(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(updates): Json<Vec<SortOrderUpdate>>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.menu_service.update_sort_order(updates).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Sort order updated".to_string(),
    })))
}

/// PUT /api/menus/reorder
///
/// Transactional variant that can also move nodes between parents.
pub async fn reorder(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(entries): Json<Vec<MenuReorder>>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.menu_service.reorder(entries).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Menus reordered".to_string(),
    })))
}

/// POST /api/menus/seed
pub async fn seed(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.menu_service.seed_defaults().await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Default menus seeded".to_string(),
    })))
}
