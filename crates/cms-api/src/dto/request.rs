//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cms_entity::content::{ContentKind, PublishStatus};
use cms_entity::upload::UploadCategory;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1))]
    pub old_password: String,
    /// New password.
    #[validate(length(min = 1))]
    pub new_password: String,
}

/// Query parameters for the content listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterQuery {
    /// Restrict to a single content kind.
    pub kind: Option<ContentKind>,
    /// Restrict to a single publication status.
    pub status: Option<PublishStatus>,
    /// Restrict to items owned by a single menu.
    pub menu_id: Option<i32>,
}

/// Query parameters for upload endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadQuery {
    /// Content item to attach the upload to.
    pub content_id: Option<i32>,
    /// Restrict listings to a single category.
    pub category: Option<UploadCategory>,
}
