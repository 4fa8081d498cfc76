//! Menu CRUD operations and reordering.

use std::sync::Arc;

use futures::future::join_all;
use tracing::info;

use cms_core::error::AppError;
use cms_database::repositories::menu::{MenuReorder, MenuRepository};
use cms_entity::menu::kind::MenuKind;
use cms_entity::menu::model::{CreateMenu, Menu, UpdateMenu};

/// Request to create a new menu.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateMenuRequest {
    /// Display label.
    pub name: String,
    /// Path segment.
    pub url: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Sibling ordering key (default 1).
    pub sort_order: Option<i32>,
    /// Visibility flag (default true).
    pub is_active: Option<bool>,
    /// Parent menu (None for root).
    pub parent_id: Option<i32>,
    /// Menu kind (default page).
    pub kind: Option<MenuKind>,
    /// Icon image reference (optional).
    pub icon_image: Option<String>,
    /// CSS class (optional).
    pub css_class: Option<String>,
}

/// A single `{id, sort_order}` entry in a batch sort-order update.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SortOrderUpdate {
    /// Row to update.
    pub id: i32,
    /// New ordering key.
    pub sort_order: i32,
}

/// Manages menu CRUD operations.
#[derive(Debug, Clone)]
pub struct MenuService {
    /// Menu repository.
    menu_repo: Arc<MenuRepository>,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(menu_repo: Arc<MenuRepository>) -> Self {
        Self { menu_repo }
    }

    /// Creates a new menu after validating the referenced parent.
    pub async fn create(&self, req: CreateMenuRequest) -> Result<Menu, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Menu name cannot be empty"));
        }
        if req.url.trim().is_empty() {
            return Err(AppError::validation("Menu url cannot be empty"));
        }

        if let Some(parent_id) = req.parent_id {
            self.menu_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::validation("Parent menu not found"))?;
        }

        let menu = self
            .menu_repo
            .create(&CreateMenu {
                name: req.name,
                url: req.url,
                description: req.description,
                sort_order: req.sort_order.unwrap_or(1),
                is_active: req.is_active.unwrap_or(true),
                parent_id: req.parent_id,
                kind: req.kind.unwrap_or_default(),
                icon_image: req.icon_image,
                css_class: req.css_class,
            })
            .await?;

        info!(menu_id = menu.id, url = %menu.url, "Menu created");
        Ok(menu)
    }

    /// Lists every menu in sibling order.
    pub async fn find_all(&self) -> Result<Vec<Menu>, AppError> {
        self.menu_repo.find_all().await
    }

    /// Gets a menu by ID.
    pub async fn find_one(&self, id: i32) -> Result<Menu, AppError> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Menu with ID {id} not found")))
    }

    /// Gets a menu by url segment.
    pub async fn find_by_url(&self, url: &str) -> Result<Menu, AppError> {
        self.menu_repo
            .find_by_url(url)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Menu with URL {url} not found")))
    }

    /// Applies a partial update, including re-parenting.
    pub async fn update(&self, id: i32, patch: UpdateMenu) -> Result<Menu, AppError> {
        // Structural checks before touching the row.
        if let Some(Some(parent_id)) = patch.parent_id {
            if parent_id == id {
                return Err(AppError::validation("Menu cannot be its own parent"));
            }
            self.menu_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::validation("Parent menu not found"))?;
        }

        let mut menu = self.find_one(id).await?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Menu name cannot be empty"));
            }
            menu.name = name;
        }
        if let Some(url) = patch.url {
            if url.trim().is_empty() {
                return Err(AppError::validation("Menu url cannot be empty"));
            }
            menu.url = url;
        }
        if let Some(description) = patch.description {
            menu.description = description;
        }
        if let Some(sort_order) = patch.sort_order {
            menu.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            menu.is_active = is_active;
        }
        if let Some(parent_id) = patch.parent_id {
            menu.parent_id = parent_id;
        }
        if let Some(kind) = patch.kind {
            menu.kind = kind;
        }
        if let Some(icon_image) = patch.icon_image {
            menu.icon_image = icon_image;
        }
        if let Some(css_class) = patch.css_class {
            menu.css_class = css_class;
        }

        self.menu_repo.update(&menu).await
    }

    /// Deletes a menu. Refused while the menu still has children, which
    /// keeps subtrees from being orphaned.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        self.find_one(id).await?;

        if self.menu_repo.count_children(id).await? > 0 {
            return Err(AppError::validation("Cannot delete menu with child items"));
        }

        self.menu_repo.delete(id).await?;
        info!(menu_id = id, "Menu deleted");
        Ok(())
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
                .map(|u| self.menu_repo.update_sort_order(u.id, u.sort_order)),
        )
        .await;

        results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }

    /// Applies a batch of reorder entries (sort order and parent) inside a
    /// single transaction.
    pub async fn reorder(&self, entries: Vec<MenuReorder>) -> Result<(), AppError> {
        for entry in &entries {
            if entry.parent_id == Some(entry.id) {
                return Err(AppError::validation("Menu cannot be its own parent"));
            }
        }
        self.menu_repo.reorder(&entries).await
    }
}
