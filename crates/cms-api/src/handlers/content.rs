//! Content listing, resolution, and CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::Json;

use cms_core::types::pagination::Page;
use cms_database::repositories::content::ContentFilter;
use cms_entity::content::model::{Content, UpdateContent};
use cms_service::content::service::CreateContentRequest;
use cms_service::menu::service::SortOrderUpdate;

use crate::dto::request::ContentFilterQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/contents
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateContentRequest>,
) -> Result<Json<ApiResponse<Content>>, ApiError> {
    let content = state.content_service.create(req).await?;
    Ok(Json(ApiResponse::ok(content)))
}

/// GET /api/contents
///
/// Filters are conjunctive; pagination defaults to page 1, 10 per page.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ContentFilterQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<Page<Content>>>, ApiError> {
    let filter = ContentFilter {
        kind: filter.kind,
        status: filter.status,
        menu_id: filter.menu_id,
    };
    let page = state
        .content_service
        .find_all(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/contents/by-menu-path/{*path}
///
/// Published content under the resolved menu and all of its descendants.
/// Unknown paths return an empty list, not an error.
pub async fn by_menu_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<ApiResponse<Vec<Content>>>, ApiError> {
    let contents = state.content_service.find_published_by_menu_path(&path).await?;
    Ok(Json(ApiResponse::ok(contents)))
}

/// GET /api/contents/by-menu/{url}
pub async fn by_menu_url(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Json<ApiResponse<Vec<Content>>>, ApiError> {
    let contents = state.content_service.find_published_by_menu_url(&url).await?;
    Ok(Json(ApiResponse::ok(contents)))
}

/// GET /api/contents/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Content>>, ApiError> {
    let content = state.content_service.find_one(id).await?;
    Ok(Json(ApiResponse::ok(content)))
}

/// GET /api/contents/{id}/view
///
/// Increments the view counter as a side effect and returns the item.
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Content>>, ApiError> {
    let content = state.content_service.record_view(id).await?;
    Ok(Json(ApiResponse::ok(content)))
}

/// PUT /api/contents/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateContent>,
) -> Result<Json<ApiResponse<Content>>, ApiError> {
    let content = state.content_service.update(id, patch).await?;
    Ok(Json(ApiResponse::ok(content)))
}

/// DELETE /api/contents/{id}
pub async fn remove(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.content_service.remove(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Content {id} deleted"),
    })))
}

/// PATCH /api/contents/sort-order
pub async fn update_sort_order(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(updates): Json<Vec<SortOrderUpdate>>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.content_service.update_sort_order(updates).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Sort order updated".to_string(),
    })))
}
