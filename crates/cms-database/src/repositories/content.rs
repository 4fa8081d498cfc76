//! Content repository implementation.

use sqlx::PgPool;

use cms_core::error::{AppError, ErrorKind};
use cms_core::result::AppResult;
use cms_core::types::pagination::{Page, PageRequest};
use cms_entity::content::model::{Content, CreateContent};
use cms_entity::content::{ContentKind, PublishStatus};

/// Conjunctive filters for content listings. `None` fields match everything.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ContentFilter {
    /// Restrict to a single content kind.
    pub kind: Option<ContentKind>,
    /// Restrict to a single publication status.
    pub status: Option<PublishStatus>,
    /// Restrict to items owned by a single menu.
    pub menu_id: Option<i32>,
}

/// The total listing order: `sort_order` ascending, newest first within a
/// rank, id as the final tiebreak so pagination is deterministic.
const LIST_ORDER: &str = "ORDER BY sort_order ASC, created_at DESC, id DESC";

/// Repository for content CRUD and scoped queries.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    /// Create a new content repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a content item by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Content>> {
        sqlx::query_as::<_, Content>("SELECT * FROM contents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find content", e))
    }

    /// List content matching the filter, paginated.
    pub async fn find_all(
        &self,
        filter: &ContentFilter,
        page: &PageRequest,
    ) -> AppResult<Page<Content>> {
        const WHERE: &str = "WHERE ($1::content_kind IS NULL OR kind = $1) \
             AND ($2::publish_status IS NULL OR status = $2) \
             AND ($3::int IS NULL OR menu_id = $3)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM contents {WHERE}"))
                .bind(filter.kind)
                .bind(filter.status)
                .bind(filter.menu_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count contents", e)
                })?;

        let contents = sqlx::query_as::<_, Content>(&format!(
            "SELECT * FROM contents {WHERE} {LIST_ORDER} LIMIT $4 OFFSET $5"
        ))
        .bind(filter.kind)
        .bind(filter.status)
        .bind(filter.menu_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list contents", e))?;

        Ok(Page::new(contents, total as u64, page))
    }

    /// List published content owned by any of the given menus.
    pub async fn find_published_by_menu_ids(&self, menu_ids: &[i32]) -> AppResult<Vec<Content>> {
        sqlx::query_as::<_, Content>(&format!(
            "SELECT * FROM contents WHERE status = 'published' AND menu_id = ANY($1) {LIST_ORDER}"
        ))
        .bind(menu_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list contents by menus", e)
        })
    }

    /// List published content directly under the menu matched by url.
    pub async fn find_published_by_menu_url(&self, url: &str) -> AppResult<Vec<Content>> {
        sqlx::query_as::<_, Content>(&format!(
            "SELECT c.* FROM contents c \
             INNER JOIN menus m ON c.menu_id = m.id \
             WHERE m.url = $1 AND c.status = 'published' {LIST_ORDER}"
        ))
        .bind(url)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list contents by menu url", e)
        })
    }

    /// Create a new content item.
    pub async fn create(&self, data: &CreateContent) -> AppResult<Content> {
        sqlx::query_as::<_, Content>(
            "INSERT INTO contents \
             (title, body, kind, status, category, featured_image, attachments, youtube_id, \
              youtube_urls, metadata, sort_order, menu_id, published_at, author_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.body)
        .bind(data.kind)
        .bind(data.status)
        .bind(&data.category)
        .bind(&data.featured_image)
        .bind(&data.attachments)
        .bind(&data.youtube_id)
        .bind(&data.youtube_urls)
        .bind(&data.metadata)
        .bind(data.sort_order)
        .bind(data.menu_id)
        .bind(data.published_at)
        .bind(&data.author_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create content", e))
    }

    /// Persist a fully-patched content row.
    pub async fn update(&self, content: &Content) -> AppResult<Content> {
        sqlx::query_as::<_, Content>(
            "UPDATE contents SET \
             title = $2, body = $3, kind = $4, status = $5, category = $6, featured_image = $7, \
             attachments = $8, youtube_id = $9, youtube_urls = $10, metadata = $11, \
             sort_order = $12, menu_id = $13, published_at = $14, author_name = $15, \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(content.id)
        .bind(&content.title)
        .bind(&content.body)
        .bind(content.kind)
        .bind(content.status)
        .bind(&content.category)
        .bind(&content.featured_image)
        .bind(&content.attachments)
        .bind(&content.youtube_id)
        .bind(&content.youtube_urls)
        .bind(&content.metadata)
        .bind(content.sort_order)
        .bind(content.menu_id)
        .bind(content.published_at)
        .bind(&content.author_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update content", e))?
        .ok_or_else(|| AppError::not_found(format!("Content with ID {} not found", content.id)))
    }

    /// Atomically add one to the view counter.
    ///
    /// Deliberately does not return the updated row; repeated calls each
    /// add one.
    pub async fn increment_view_count(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("UPDATE contents SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment view count", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Content with ID {id} not found"
            )));
        }
        Ok(())
    }

    /// Update the ordering key of a single content item.
    pub async fn update_sort_order(&self, id: i32, sort_order: i32) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE contents SET sort_order = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(sort_order)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update sort order", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Content with ID {id} not found"
            )));
        }
        Ok(())
    }

    /// Delete a content item.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete content", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
