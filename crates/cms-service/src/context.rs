//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cms_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the JWT by the API layer and passed into service
/// methods so that every mutation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username (convenience field from JWT claims).
    pub username: String,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String, role: UserRole) -> Self {
        Self {
            user_id,
            username,
            role,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
