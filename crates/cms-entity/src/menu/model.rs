//! Menu entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::MenuKind;

/// A navigation menu node.
///
/// Menus form a forest encoded as flat rows with parent pointers:
/// `parent_id` is NULL for root sections and references another menu row
/// otherwise. Child lists are never stored; they are derived per request
/// by the tree service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Menu {
    /// Unique menu identifier.
    pub id: i32,
    /// Display label.
    pub name: String,
    /// Path segment, unique within its sibling set.
    pub url: String,
    /// Longer description shown on section landing pages.
    pub description: Option<String>,
    /// Sibling ordering key (ascending).
    pub sort_order: i32,
    /// Visibility flag.
    pub is_active: bool,
    /// Parent menu ID (NULL for root sections).
    pub parent_id: Option<i32>,
    /// What the menu links to.
    pub kind: MenuKind,
    /// Optional icon image reference.
    pub icon_image: Option<String>,
    /// Optional CSS class for the frontend.
    pub css_class: Option<String>,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
    /// When the menu was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    /// Check if this is a root menu (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenu {
    /// Display label.
    pub name: String,
    /// Path segment.
    pub url: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Sibling ordering key.
    pub sort_order: i32,
    /// Visibility flag.
    pub is_active: bool,
    /// Parent menu (None for root).
    pub parent_id: Option<i32>,
    /// Menu kind.
    pub kind: MenuKind,
    /// Icon image reference (optional).
    pub icon_image: Option<String>,
    /// CSS class (optional).
    pub css_class: Option<String>,
}

/// Partial update of an existing menu. Missing fields are left unchanged;
/// nullable columns use a double `Option` so that an explicit null clears
/// them (for `parent_id`, re-roots the node).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMenu {
    /// New display label.
    pub name: Option<String>,
    /// New path segment.
    pub url: Option<String>,
    /// New description.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub description: Option<Option<String>>,
    /// New sibling ordering key.
    pub sort_order: Option<i32>,
    /// New visibility flag.
    pub is_active: Option<bool>,
    /// New parent: an explicit null moves the node to the root level.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub parent_id: Option<Option<i32>>,
    /// New menu kind.
    pub kind: Option<MenuKind>,
    /// New icon image reference.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub icon_image: Option<Option<String>>,
    /// New CSS class.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub css_class: Option<Option<String>>,
}
