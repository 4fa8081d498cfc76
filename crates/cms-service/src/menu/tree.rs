//! Menu tree building, path resolution, and descendant collection.
//!
//! The tree algorithms are pure, synchronous transforms over an
//! already-fetched snapshot of menu rows; only fetching touches the
//! database.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use cms_core::error::AppError;
use cms_database::repositories::menu::MenuRepository;
use cms_entity::menu::model::Menu;
use cms_entity::menu::tree::MenuTreeNode;

/// Builds menu trees and resolves slash-delimited paths.
#[derive(Debug, Clone)]
pub struct MenuTreeService {
    /// Menu repository.
    menu_repo: Arc<MenuRepository>,
}

impl MenuTreeService {
    /// Creates a new tree service.
    pub fn new(menu_repo: Arc<MenuRepository>) -> Self {
        Self { menu_repo }
    }

    /// Builds the complete navigation forest from all menu rows.
    pub async fn get_tree(&self) -> Result<Vec<MenuTreeNode>, AppError> {
        let menus = self.menu_repo.find_all().await?;
        Ok(build_forest(&menus))
    }

    /// Resolves a slash-delimited path (e.g. `"about-general/life"`) to a
    /// single menu, walking the hierarchy one level at a time.
    ///
    /// Fails with NotFound naming the full attempted path at the first
    /// segment that does not resolve.
    pub async fn resolve_path(&self, path: &str) -> Result<Menu, AppError> {
        let not_found = || AppError::not_found(format!("Menu path \"{path}\" not found"));

        let mut segments = path_segments(path).into_iter();
        let first = segments.next().ok_or_else(not_found)?;

        let mut current = self
            .menu_repo
            .find_root_by_url(first)
            .await?
            .ok_or_else(not_found)?;

        for segment in segments {
            current = self
                .menu_repo
                .find_child_by_url(current.id, segment)
                .await?
                .ok_or_else(not_found)?;
        }

        Ok(current)
    }

    /// Collects the given menu's id and every transitive descendant id,
    /// for scoping content queries across a section and its sub-sections.
    pub async fn collect_descendant_ids(&self, id: i32) -> Result<Vec<i32>, AppError> {
        let menus = self.menu_repo.find_all().await?;
        descendant_ids(id, &menus)
    }
}

/// Transforms a flat snapshot of menu rows into a rooted forest.
///
/// Each node's children are attached by `parent_id` and every level is
/// ordered by `sort_order` then `name`, so the output is deterministic for
/// a given snapshot. A row whose parent does not resolve within the
/// snapshot (including a row that names itself) is treated as a root.
pub fn build_forest(menus: &[Menu]) -> Vec<MenuTreeNode> {
    let ids: HashSet<i32> = menus.iter().map(|m| m.id).collect();

    let mut children_of: HashMap<i32, Vec<&Menu>> = HashMap::new();
    let mut roots: Vec<&Menu> = Vec::new();

    for menu in menus {
        match menu.parent_id {
            Some(parent) if parent != menu.id && ids.contains(&parent) => {
                children_of.entry(parent).or_default().push(menu);
            }
            _ => roots.push(menu),
        }
    }

    roots.sort_by(sibling_order);
    for siblings in children_of.values_mut() {
        siblings.sort_by(sibling_order);
    }

    roots
        .into_iter()
        .map(|menu| attach_children(menu, &children_of))
        .collect()
}

/// Collects `id` plus every transitive descendant id from a flat snapshot.
///
/// Tracks visited ids and fails fast when a menu is reached twice, so
/// malformed cyclic parent data cannot cause unbounded recursion.
pub fn descendant_ids(id: i32, menus: &[Menu]) -> Result<Vec<i32>, AppError> {
    let mut children_of: HashMap<i32, Vec<i32>> = HashMap::new();
    for menu in menus {
        if let Some(parent) = menu.parent_id {
            children_of.entry(parent).or_default().push(menu.id);
        }
    }

    let mut visited: HashSet<i32> = HashSet::new();
    let mut collected: Vec<i32> = Vec::new();
    let mut stack: Vec<i32> = vec![id];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            return Err(AppError::validation(format!(
                "Menu hierarchy contains a cycle at ID {current}"
            )));
        }
        collected.push(current);
        if let Some(children) = children_of.get(&current) {
            stack.extend(children.iter().copied());
        }
    }

    Ok(collected)
}

/// Splits a slash-delimited path into its segments, discarding empty ones
/// (leading, trailing, or doubled slashes).
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn sibling_order(a: &&Menu, b: &&Menu) -> std::cmp::Ordering {
    a.sort_order
        .cmp(&b.sort_order)
        .then_with(|| a.name.cmp(&b.name))
}

fn attach_children(menu: &Menu, children_of: &HashMap<i32, Vec<&Menu>>) -> MenuTreeNode {
    let mut node = MenuTreeNode::leaf(menu);
    if let Some(children) = children_of.get(&menu.id) {
        node.children = children
            .iter()
            .map(|child| attach_children(child, children_of))
            .collect();
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cms_entity::menu::kind::MenuKind;

    fn menu(id: i32, name: &str, url: &str, parent_id: Option<i32>, sort_order: i32) -> Menu {
        let now = Utc::now();
        Menu {
            id,
            name: name.to_string(),
            url: url.to_string(),
            description: None,
            sort_order,
            is_active: true,
            parent_id,
            kind: MenuKind::Page,
            icon_image: None,
            css_class: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_forest_preserves_every_node() {
        let menus = vec![
            menu(1, "About", "about", None, 1),
            menu(2, "Life", "life", Some(1), 1),
            menu(3, "Sources", "sources", Some(1), 2),
            menu(4, "Library", "library", None, 2),
            menu(5, "Press", "press", Some(4), 1),
            menu(6, "Archive", "archive", Some(5), 1),
        ];

        let forest = build_forest(&menus);
        assert_eq!(forest.len(), 2);
        assert_eq!(
            forest.iter().map(MenuTreeNode::count).sum::<usize>(),
            menus.len()
        );

        let about = &forest[0];
        assert_eq!(about.id, 1);
        assert_eq!(about.children.len(), 2);
        assert_eq!(about.children[0].id, 2);

        let library = &forest[1];
        assert_eq!(library.children[0].children[0].id, 6);
    }

    #[test]
    fn test_forest_orders_siblings_by_sort_order_then_name() {
        let menus = vec![
            menu(1, "Beta", "beta", None, 2),
            menu(2, "Alpha", "alpha", None, 2),
            menu(3, "First", "first", None, 1),
        ];

        let forest = build_forest(&menus);
        let names: Vec<&str> = forest.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Alpha", "Beta"]);
    }

    #[test]
    fn test_unresolvable_parent_falls_back_to_root() {
        let menus = vec![
            menu(1, "Orphan", "orphan", Some(99), 1),
            menu(2, "Selfish", "selfish", Some(2), 2),
        ];

        let forest = build_forest(&menus);
        assert_eq!(forest.len(), 2);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_path_segments_discard_empty() {
        assert_eq!(path_segments("about-general/life"), vec!["about-general", "life"]);
        assert_eq!(path_segments("/about-general//life/"), vec!["about-general", "life"]);
        assert!(path_segments("").is_empty());
        assert!(path_segments("///").is_empty());
    }

    #[test]
    fn test_descendants_of_leaf_is_singleton() {
        let menus = vec![menu(1, "About", "about", None, 1)];
        assert_eq!(descendant_ids(1, &menus).unwrap(), vec![1]);
    }

    #[test]
    fn test_descendants_include_self_and_all_levels() {
        let menus = vec![
            menu(1, "About", "about", None, 1),
            menu(2, "Life", "life", Some(1), 1),
            menu(3, "Youth", "youth", Some(2), 1),
            menu(4, "Library", "library", None, 2),
        ];

        let mut ids = descendant_ids(1, &menus).unwrap();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_cyclic_parent_data_fails_instead_of_looping() {
        let a = menu(1, "A", "a", Some(2), 1);
        let b = menu(2, "B", "b", Some(1), 1);

        let err = descendant_ids(1, &[a, b]).unwrap_err();
        assert_eq!(err.kind, cms_core::error::ErrorKind::Validation);
    }
}
