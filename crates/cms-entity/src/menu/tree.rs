//! Menu tree structures for hierarchical navigation display.

use serde::{Deserialize, Serialize};

use super::kind::MenuKind;
use super::model::Menu;

/// A node in the navigation tree: a menu row together with its computed
/// child list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTreeNode {
    /// Menu ID.
    pub id: i32,
    /// Display label.
    pub name: String,
    /// Path segment.
    pub url: String,
    /// Description.
    pub description: Option<String>,
    /// Sibling ordering key.
    pub sort_order: i32,
    /// Visibility flag.
    pub is_active: bool,
    /// Menu kind.
    pub kind: MenuKind,
    /// Icon image reference.
    pub icon_image: Option<String>,
    /// CSS class.
    pub css_class: Option<String>,
    /// Child nodes, ordered by `sort_order` then `name`.
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    /// Build a childless node from a menu row.
    pub fn leaf(menu: &Menu) -> Self {
        Self {
            id: menu.id,
            name: menu.name.clone(),
            url: menu.url.clone(),
            description: menu.description.clone(),
            sort_order: menu.sort_order,
            is_active: menu.is_active,
            kind: menu.kind,
            icon_image: menu.icon_image.clone(),
            css_class: menu.css_class.clone(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MenuTreeNode::count).sum::<usize>()
    }
}
