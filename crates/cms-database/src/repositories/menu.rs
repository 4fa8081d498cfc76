//! Menu repository implementation.

use sqlx::PgPool;

use cms_core::error::{AppError, ErrorKind};
use cms_core::result::AppResult;
use cms_entity::menu::model::{CreateMenu, Menu};

/// A single entry in a batch reorder request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MenuReorder {
    /// Menu to move.
    pub id: i32,
    /// New sibling ordering key.
    pub sort_order: i32,
    /// New parent (None keeps the node at the root level).
    pub parent_id: Option<i32>,
}

/// Repository for menu CRUD and hierarchy queries.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: PgPool,
}

impl MenuRepository {
    /// Create a new menu repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a menu by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find menu", e))
    }

    /// Find the first menu with the given url anywhere in the hierarchy.
    pub async fn find_by_url(&self, url: &str) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>(
            "SELECT * FROM menus WHERE url = $1 ORDER BY parent_id NULLS FIRST, id ASC LIMIT 1",
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find menu by url", e))
    }

    /// Find a root-level menu by url.
    pub async fn find_root_by_url(&self, url: &str) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE parent_id IS NULL AND url = $1")
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find root menu by url", e)
            })
    }

    /// Find a direct child of the given menu by url.
    pub async fn find_child_by_url(&self, parent_id: i32, url: &str) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE parent_id = $1 AND url = $2")
            .bind(parent_id)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find child menu by url", e)
            })
    }

    /// List every menu, ordered for deterministic tree building.
    pub async fn find_all(&self) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus ORDER BY sort_order ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))
    }

    /// Count all menus.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menus")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count menus", e))?;
        Ok(count as u64)
    }

    /// Count direct children of a menu.
    pub async fn count_children(&self, id: i32) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menus WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count children", e)
            })?;
        Ok(count as u64)
    }

    /// Create a new menu.
    pub async fn create(&self, data: &CreateMenu) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            "INSERT INTO menus \
             (name, url, description, sort_order, is_active, parent_id, kind, icon_image, css_class) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.url)
        .bind(&data.description)
        .bind(data.sort_order)
        .bind(data.is_active)
        .bind(data.parent_id)
        .bind(data.kind)
        .bind(&data.icon_image)
        .bind(&data.css_class)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu", e))
    }

    /// Persist a fully-patched menu row.
    pub async fn update(&self, menu: &Menu) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            "UPDATE menus SET \
             name = $2, url = $3, description = $4, sort_order = $5, is_active = $6, \
             parent_id = $7, kind = $8, icon_image = $9, css_class = $10, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(menu.id)
        .bind(&menu.name)
        .bind(&menu.url)
        .bind(&menu.description)
        .bind(menu.sort_order)
        .bind(menu.is_active)
        .bind(menu.parent_id)
        .bind(menu.kind)
        .bind(&menu.icon_image)
        .bind(&menu.css_class)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu", e))?
        .ok_or_else(|| AppError::not_found(format!("Menu with ID {} not found", menu.id)))
    }

    /// Update the ordering key of a single menu.
    pub async fn update_sort_order(&self, id: i32, sort_order: i32) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE menus SET sort_order = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(sort_order)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update sort order", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Menu with ID {id} not found")));
        }
        Ok(())
    }

    /// Apply a batch of reorder entries inside a single transaction.
    ///
    /// Either every entry is applied or none are.
    pub async fn reorder(&self, entries: &[MenuReorder]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for entry in entries {
            let result = sqlx::query(
                "UPDATE menus SET sort_order = $2, parent_id = $3, updated_at = NOW() \
                 WHERE id = $1",
            )
            .bind(entry.id)
            .bind(entry.sort_order)
            .bind(entry.parent_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to reorder menu", e)
            })?;

            if result.rows_affected() == 0 {
                return Err(AppError::not_found(format!(
                    "Menu with ID {} not found",
                    entry.id
                )));
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e)
        })
    }

    /// Delete a menu.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete menu", e))?;
        Ok(result.rows_affected() > 0)
    }
}
