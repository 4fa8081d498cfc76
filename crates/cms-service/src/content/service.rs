//! Content CRUD, menu-scoped resolution, and view counting.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::info;

use cms_core::error::{AppError, ErrorKind};
use cms_core::types::pagination::{Page, PageRequest};
use cms_database::repositories::content::{ContentFilter, ContentRepository};
use cms_database::repositories::menu::MenuRepository;
use cms_entity::content::model::{Content, CreateContent, UpdateContent};
use cms_entity::content::{ContentKind, PublishStatus};

use crate::menu::service::SortOrderUpdate;
use crate::menu::tree::MenuTreeService;

/// Request to create a new content item.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateContentRequest {
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Content kind (default article).
    pub kind: Option<ContentKind>,
    /// Publication status (default draft).
    pub status: Option<PublishStatus>,
    /// Category label.
    pub category: Option<String>,
    /// Featured image reference.
    pub featured_image: Option<String>,
    /// Attachment references.
    pub attachments: Option<Vec<String>>,
    /// YouTube video ID.
    pub youtube_id: Option<String>,
    /// Additional YouTube URLs.
    pub youtube_urls: Option<Vec<String>>,
    /// Schema-less additional data.
    pub metadata: Option<serde_json::Value>,
    /// Ordering key (default 1).
    pub sort_order: Option<i32>,
    /// Owning menu node.
    pub menu_id: Option<i32>,
    /// Author byline.
    pub author_name: Option<String>,
}

/// Manages content items and their resolution against the menu hierarchy.
#[derive(Debug, Clone)]
pub struct ContentService {
    /// Content repository.
    content_repo: Arc<ContentRepository>,
    /// Menu repository, for validating menu references.
    menu_repo: Arc<MenuRepository>,
    /// Tree service, for path resolution and descendant expansion.
    tree: Arc<MenuTreeService>,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(
        content_repo: Arc<ContentRepository>,
        menu_repo: Arc<MenuRepository>,
        tree: Arc<MenuTreeService>,
    ) -> Self {
        Self {
            content_repo,
            menu_repo,
            tree,
        }
    }

    /// Creates a new content item.
    ///
    /// Creating directly in the published state stamps `published_at`.
    pub async fn create(&self, req: CreateContentRequest) -> Result<Content, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Content title cannot be empty"));
        }

        if let Some(menu_id) = req.menu_id {
            self.menu_repo
                .find_by_id(menu_id)
                .await?
                .ok_or_else(|| AppError::validation("Menu not found"))?;
        }

        let status = req.status.unwrap_or_default();
        let published_at = (status == PublishStatus::Published).then(Utc::now);

        let content = self
            .content_repo
            .create(&CreateContent {
                title: req.title,
                body: req.body,
                kind: req.kind.unwrap_or_default(),
                status,
                category: req.category,
                featured_image: req.featured_image,
                attachments: req.attachments,
                youtube_id: req.youtube_id,
                youtube_urls: req.youtube_urls,
                metadata: req.metadata,
                sort_order: req.sort_order.unwrap_or(1),
                menu_id: req.menu_id,
                published_at,
                author_name: req.author_name,
            })
            .await?;

        info!(content_id = content.id, status = %content.status, "Content created");
        Ok(content)
    }

    /// Lists content matching the filter, paginated in the canonical
    /// listing order.
    pub async fn find_all(
        &self,
        filter: &ContentFilter,
        page: &PageRequest,
    ) -> Result<Page<Content>, AppError> {
        self.content_repo.find_all(filter, page).await
    }

    /// Gets a content item by ID.
    pub async fn find_one(&self, id: i32) -> Result<Content, AppError> {
        self.content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Content with ID {id} not found")))
    }

    /// Returns published content under the menu resolved from the given
    /// path, including every descendant section.
    ///
    /// An unresolvable path yields an empty list rather than an error:
    /// unknown navigation paths render as "no content" on the site.
    pub async fn find_published_by_menu_path(
        &self,
        path: &str,
    ) -> Result<Vec<Content>, AppError> {
        let menu = match self.tree.resolve_path(path).await {
            Ok(menu) => menu,
            Err(e) if e.kind == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let menu_ids = self.tree.collect_descendant_ids(menu.id).await?;
        self.content_repo.find_published_by_menu_ids(&menu_ids).await
    }

    /// Returns published content directly under the menu matched by url,
    /// without descendant expansion.
    pub async fn find_published_by_menu_url(&self, url: &str) -> Result<Vec<Content>, AppError> {
        self.content_repo.find_published_by_menu_url(url).await
    }

    /// Applies a partial update.
    ///
    /// Entering the published state from a non-published one stamps
    /// `published_at`; every other transition leaves it untouched.
    pub async fn update(&self, id: i32, patch: UpdateContent) -> Result<Content, AppError> {
        if let Some(Some(menu_id)) = patch.menu_id {
            self.menu_repo
                .find_by_id(menu_id)
                .await?
                .ok_or_else(|| AppError::validation("Menu not found"))?;
        }

        let mut content = self.find_one(id).await?;

        if let Some(status) = patch.status {
            if status == PublishStatus::Published && content.status != PublishStatus::Published {
                content.published_at = Some(Utc::now());
            }
            content.status = status;
        }

        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Content title cannot be empty"));
            }
            content.title = title;
        }
        if let Some(body) = patch.body {
            content.body = body;
        }
        if let Some(kind) = patch.kind {
            content.kind = kind;
        }
        if let Some(category) = patch.category {
            content.category = category;
        }
        if let Some(featured_image) = patch.featured_image {
            content.featured_image = featured_image;
        }
        if let Some(attachments) = patch.attachments {
            content.attachments = attachments;
        }
        if let Some(youtube_id) = patch.youtube_id {
            content.youtube_id = youtube_id;
        }
        if let Some(youtube_urls) = patch.youtube_urls {
            content.youtube_urls = youtube_urls;
        }
        if let Some(metadata) = patch.metadata {
            content.metadata = metadata;
        }
        if let Some(sort_order) = patch.sort_order {
            content.sort_order = sort_order;
        }
        if let Some(menu_id) = patch.menu_id {
            content.menu_id = menu_id;
        }
        if let Some(author_name) = patch.author_name {
            content.author_name = author_name;
        }

        self.content_repo.update(&content).await
    }

    /// Deletes a content item.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        self.find_one(id).await?;
        self.content_repo.delete(id).await?;
        info!(content_id = id, "Content deleted");
        Ok(())
    }

    /// Adds one to the view counter.
    ///
    /// A retried request counts twice; acceptable for a display metric.
    pub async fn increment_view_count(&self, id: i32) -> Result<(), AppError> {
        self.content_repo.increment_view_count(id).await
    }

    /// Records a view and returns the item.
    pub async fn record_view(&self, id: i32) -> Result<Content, AppError> {
        self.content_repo.increment_view_count(id).await?;
        self.find_one(id).await
    }

    /// Applies a batch of sort-order updates.
    ///
    /// Each update is dispatched independently and concurrently; there is
    /// no transaction across the batch, so a failure partway through
    /// leaves the updates that already succeeded in place.
    pub async fn update_sort_order(&self, updates: Vec<SortOrderUpdate>) -> Result<(), AppError> {
        let results = join_all(
            updates
                .iter()
                .map(|u| self.content_repo.update_sort_order(u.id, u.sort_order)),
        )
        .await;

        results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cms_entity::content::PublishStatus;

    // The publish stamping rule itself: entering Published from any other
    // state stamps the timestamp, staying in Published does not.
    fn should_stamp(prior: PublishStatus, next: PublishStatus) -> bool {
        next == PublishStatus::Published && prior != PublishStatus::Published
    }

    #[test]
    fn test_publish_transition_matrix() {
        use PublishStatus::*;
        assert!(should_stamp(Draft, Published));
        assert!(should_stamp(Private, Published));
        assert!(!should_stamp(Published, Published));
        assert!(!should_stamp(Published, Draft));
        assert!(!should_stamp(Published, Private));
        assert!(!should_stamp(Draft, Private));
    }
}
