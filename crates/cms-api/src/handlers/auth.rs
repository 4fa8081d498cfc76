//! Auth handlers — login, refresh, profile, password change.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use cms_core::error::AppError;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RefreshRequest};
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, RefreshResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: UserResponse::from(&result.user),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResponse>>, ApiError> {
    let result = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(RefreshResponse {
        access_token: result.access_token,
        access_expires_at: result.access_expires_at,
        user: UserResponse::from(&result.user),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .auth_service
        .change_password(&auth, &req.old_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password updated successfully".to_string(),
    })))
}
