//! End-to-end checks of the menu tree algorithms over realistic fixtures.
//!
//! These exercise the pure transforms directly; the database-backed path
//! walks are covered by the same logic one repository call at a time.

use chrono::Utc;

use cms_entity::menu::kind::MenuKind;
use cms_entity::menu::model::Menu;
use cms_entity::menu::tree::MenuTreeNode;
use cms_service::menu::tree::{build_forest, descendant_ids};

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

/// The seeded site structure: four roots, three with children.
fn default_site() -> Vec<Menu> {
    vec![
        menu(1, "절재 김종서 장군", "about-general", None, 1),
        menu(2, "기념사업회", "organization", None, 2),
        menu(3, "자료실", "library", None, 3),
        menu(4, "연락처 & 오시는 길", "contact", None, 4),
        menu(5, "생애 및 업적", "life", Some(1), 1),
        menu(6, "역사적 의의", "significance", Some(1), 2),
        menu(7, "보도자료", "press", Some(3), 1),
        menu(8, "학술 자료·연구 보고서", "academic", Some(3), 2),
        menu(9, "사진·영상 아카이브", "archive", Some(3), 3),
    ]
}

#[test]
fn test_site_forest_shape() {
    let menus = default_site();
    let forest = build_forest(&menus);

    assert_eq!(forest.len(), 4);
    assert_eq!(
        forest.iter().map(MenuTreeNode::count).sum::<usize>(),
        menus.len()
    );

    let urls: Vec<&str> = forest.iter().map(|n| n.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["about-general", "organization", "library", "contact"]
    );

    let library = &forest[2];
    let child_urls: Vec<&str> = library.children.iter().map(|n| n.url.as_str()).collect();
    assert_eq!(child_urls, vec!["press", "academic", "archive"]);
}

#[test]
fn test_forest_parent_links_preserved() {
    let menus = default_site();
    let forest = build_forest(&menus);

    // Every child node in the forest must correspond to its row's parent_id.
    fn check(node: &MenuTreeNode, menus: &[Menu]) {
        for child in &node.children {
            let row = menus.iter().find(|m| m.id == child.id).unwrap();
            assert_eq!(row.parent_id, Some(node.id));
            check(child, menus);
        }
    }
    for root in &forest {
        let row = menus.iter().find(|m| m.id == root.id).unwrap();
        assert!(row.parent_id.is_none());
        check(root, &menus);
    }
}

#[test]
fn test_section_descendants_scope_content_queries() {
    let menus = default_site();

    let mut library_ids = descendant_ids(3, &menus).unwrap();
    library_ids.sort_unstable();
    assert_eq!(library_ids, vec![3, 7, 8, 9]);

    // A leaf scopes to exactly itself.
    assert_eq!(descendant_ids(4, &menus).unwrap(), vec![4]);
}

#[test]
fn test_descendants_never_loop_on_corrupt_data() {
    // Three-level cycle that direct self-parent checks cannot catch.
    let menus = vec![
        menu(1, "A", "a", Some(3), 1),
        menu(2, "B", "b", Some(1), 1),
        menu(3, "C", "c", Some(2), 1),
    ];

    assert!(descendant_ids(1, &menus).is_err());
}
