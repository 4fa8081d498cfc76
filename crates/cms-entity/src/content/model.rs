//! Content entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::ContentKind;
use super::status::PublishStatus;

/// A published content item: an article, announcement, press release,
/// academic material, video, or photo gallery.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    /// Unique content identifier.
    pub id: i32,
    /// Title.
    pub title: String,
    /// Body text (HTML or markdown, the frontend decides).
    pub body: String,
    /// Content kind.
    pub kind: ContentKind,
    /// Publication status.
    pub status: PublishStatus,
    /// Free-form category label.
    pub category: Option<String>,
    /// Featured image reference.
    pub featured_image: Option<String>,
    /// Attachment file references.
    pub attachments: Option<Vec<String>>,
    /// YouTube video ID for video content.
    pub youtube_id: Option<String>,
    /// Additional YouTube URLs.
    pub youtube_urls: Option<Vec<String>>,
    /// Schema-less additional data.
    pub metadata: Option<serde_json::Value>,
    /// Number of times the item has been viewed.
    pub view_count: i32,
    /// Ordering key within a listing (ascending).
    pub sort_order: i32,
    /// Owning menu node (optional).
    pub menu_id: Option<i32>,
    /// When the content was created.
    pub created_at: DateTime<Utc>,
    /// When the content was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the content first entered the published state.
    pub published_at: Option<DateTime<Utc>>,
    /// Author byline.
    pub author_name: Option<String>,
}

impl Content {
    /// Check if the content is publicly visible.
    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

/// Data required to create a new content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContent {
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Content kind.
    pub kind: ContentKind,
    /// Publication status.
    pub status: PublishStatus,
    /// Category label (optional).
    pub category: Option<String>,
    /// Featured image reference (optional).
    pub featured_image: Option<String>,
    /// Attachment references (optional).
    pub attachments: Option<Vec<String>>,
    /// YouTube video ID (optional).
    pub youtube_id: Option<String>,
    /// Additional YouTube URLs (optional).
    pub youtube_urls: Option<Vec<String>>,
    /// Schema-less additional data (optional).
    pub metadata: Option<serde_json::Value>,
    /// Ordering key.
    pub sort_order: i32,
    /// Owning menu node (optional).
    pub menu_id: Option<i32>,
    /// Publication timestamp, set by the service when created published.
    pub published_at: Option<DateTime<Utc>>,
    /// Author byline (optional).
    pub author_name: Option<String>,
}

/// Partial update of an existing content item. Missing fields are left
/// unchanged; nullable columns use a double `Option` so that an explicit
/// null clears the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContent {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    pub body: Option<String>,
    /// New content kind.
    pub kind: Option<ContentKind>,
    /// New publication status.
    pub status: Option<PublishStatus>,
    /// New category label.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub category: Option<Option<String>>,
    /// New featured image reference.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub featured_image: Option<Option<String>>,
    /// New attachment references.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub attachments: Option<Option<Vec<String>>>,
    /// New YouTube video ID.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub youtube_id: Option<Option<String>>,
    /// New additional YouTube URLs.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub youtube_urls: Option<Option<Vec<String>>>,
    /// New schema-less additional data.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub metadata: Option<Option<serde_json::Value>>,
    /// New ordering key.
    pub sort_order: Option<i32>,
    /// New owning menu node.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub menu_id: Option<Option<i32>>,
    /// New author byline.
    #[serde(deserialize_with = "crate::serde_util::double_option")]
    pub author_name: Option<Option<String>>,
}
