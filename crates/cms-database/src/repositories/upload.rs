//! File upload repository implementation.

use std::collections::HashMap;

use sqlx::PgPool;

use cms_core::error::{AppError, ErrorKind};
use cms_core::result::AppResult;
use cms_entity::upload::model::{CreateFileUpload, FileUpload, UploadStats};
use cms_entity::upload::UploadCategory;

/// Repository for upload record CRUD and statistics.
#[derive(Debug, Clone)]
pub struct UploadRepository {
    pool: PgPool,
}

impl UploadRepository {
    /// Create a new upload repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an upload record by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<FileUpload>> {
        sqlx::query_as::<_, FileUpload>("SELECT * FROM file_uploads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find upload", e))
    }

    /// List upload records, optionally restricted to one category,
    /// newest first.
    pub async fn find_all(&self, category: Option<UploadCategory>) -> AppResult<Vec<FileUpload>> {
        sqlx::query_as::<_, FileUpload>(
            "SELECT * FROM file_uploads \
             WHERE ($1::upload_category IS NULL OR category = $1) \
             ORDER BY uploaded_at DESC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list uploads", e))
    }

    /// List upload records attached to a content item, newest first.
    pub async fn find_by_content_id(&self, content_id: i32) -> AppResult<Vec<FileUpload>> {
        sqlx::query_as::<_, FileUpload>(
            "SELECT * FROM file_uploads WHERE content_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(content_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list uploads by content", e)
        })
    }

    /// Create a new upload record.
    pub async fn create(&self, data: &CreateFileUpload) -> AppResult<FileUpload> {
        sqlx::query_as::<_, FileUpload>(
            "INSERT INTO file_uploads \
             (original_name, file_name, file_path, mime_type, file_size, content_id, category) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&data.original_name)
        .bind(&data.file_name)
        .bind(&data.file_path)
        .bind(&data.mime_type)
        .bind(data.file_size)
        .bind(data.content_id)
        .bind(data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create upload", e))
    }

    /// Delete an upload record.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM file_uploads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete upload", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate statistics over all upload records.
    pub async fn stats(&self) -> AppResult<UploadStats> {
        let rows: Vec<(UploadCategory, i64, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*), COALESCE(SUM(file_size), 0) \
             FROM file_uploads GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute upload stats", e)
        })?;

        let mut stats = UploadStats {
            total_files: 0,
            total_size: 0,
            categories: HashMap::new(),
        };
        for (category, count, size) in rows {
            stats.total_files += count as u64;
            stats.total_size += size as u64;
            stats
                .categories
                .insert(category.as_str().to_string(), count as u64);
        }
        Ok(stats)
    }
}
