//! Site menu rendering.

use serde::Serialize;

use vx_registry::consts::ROOT_URL;
use vx_registry::{RegistryIndex, ViewNode, url};

/// One entry in the site menu tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display title.
    pub title: String,
    /// Link target url.
    pub url: String,
    /// Nesting level, 0 for top-level entries.
    pub level: usize,
    /// True when this entry is the current page.
    pub active: bool,
    /// True when this entry or one of its descendants is the current page.
    /// The whole ancestor chain of the active page is open.
    pub open: bool,
    /// True when the entry has visible children.
    pub has_children: bool,
    /// Visible child entries, ordered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

/// Build the menu tree for a snapshot.
///
/// Walks the whole tree depth-first from the synthetic root, keeping only
/// pages visible under `current_version`. `current_url` marks the active
/// entry and opens its ancestor chain.
#[must_use]
pub fn menu(
    index: &RegistryIndex,
    current_url: &str,
    current_version: Option<&str>,
) -> Vec<MenuItem> {
    let current = url::normalize(current_url);
    index
        .visible_children(ROOT_URL, current_version)
        .into_iter()
        .map(|node| build_item(index, node, 0, &current, current_version))
        .collect()
}

fn build_item(
    index: &RegistryIndex,
    node: &ViewNode,
    level: usize,
    current: &str,
    current_version: Option<&str>,
) -> MenuItem {
    let children: Vec<MenuItem> = index
        .visible_children(&node.url, current_version)
        .into_iter()
        .map(|child| build_item(index, child, level + 1, current, current_version))
        .collect();

    let active = node.url == current;
    let open = active || children.iter().any(|child| child.open);

    MenuItem {
        title: node.title.clone(),
        url: node.url.clone(),
        level,
        active,
        open,
        has_children: !children.is_empty(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use vx_source::MockPageSource;

    use super::*;

    fn index() -> RegistryIndex {
        let source = MockPageSource::new()
            .with_file(
                "/Views/Documentation/index.page",
                "Title = \"Home\";\nOrder = \"1\";",
            )
            .with_file(
                "/Views/Documentation/Config/index.page",
                "Title = \"Config\";\nOrder = \"2\";",
            )
            .with_file(
                "/Views/Documentation/Config/Db.page",
                "Title = \"Database\";\nOrder = \"1\";",
            )
            .with_file(
                "/Views/Documentation/Config/Node.page",
                "Title = \"Node Only\";\nOrder = \"2\";\nVersionNameRegex = \"^Node\";",
            )
            .with_file(
                "/Views/Documentation/About.page",
                "Title = \"About\";\nOrder = \"9\";",
            );
        vx_registry::build("/Views/Documentation", &source).unwrap()
    }

    #[test]
    fn test_menu_mirrors_tree_structure() {
        let index = index();

        let items = menu(&index, "/", None);

        assert_eq!(items.len(), 1);
        let home = &items[0];
        assert_eq!(home.title, "Home");
        assert_eq!(home.level, 0);
        assert!(home.has_children);

        let child_titles: Vec<_> = home.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(child_titles, vec!["Config", "About"]);
        assert_eq!(home.children[0].level, 1);
        assert_eq!(home.children[0].children[0].title, "Database");
        assert_eq!(home.children[0].children[0].level, 2);
    }

    #[test]
    fn test_menu_marks_active_entry_and_opens_ancestors() {
        let index = index();

        let items = menu(&index, "/Documentation/Config/Db", None);

        let home = &items[0];
        assert!(home.open);
        assert!(!home.active);

        let config = &home.children[0];
        assert!(config.open);
        assert!(!config.active);

        let db = &config.children[0];
        assert!(db.active);
        assert!(db.open);

        let about = &home.children[1];
        assert!(!about.open);
    }

    #[test]
    fn test_menu_active_url_is_normalized() {
        let index = index();

        let items = menu(&index, "/Documentation/Config/index", None);

        assert!(items[0].children[0].active);
    }

    #[test]
    fn test_menu_filters_by_current_version() {
        let index = index();

        let all = menu(&index, "/", Some("NodeJs"));
        let config = &all[0].children[0];
        assert_eq!(config.children.len(), 2);

        let filtered = menu(&index, "/", Some("NetJs"));
        let config = &filtered[0].children[0];
        let titles: Vec<_> = config.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Database"]);
    }

    #[test]
    fn test_menu_no_version_shows_everything() {
        let index = index();

        let items = menu(&index, "/", None);
        let config = &items[0].children[0];

        assert_eq!(config.children.len(), 2);
    }

    #[test]
    fn test_menu_serialization_skips_empty_children() {
        let index = index();

        let items = menu(&index, "/", None);
        let json = serde_json::to_value(&items[0]).unwrap();

        assert_eq!(json["title"], "Home");
        assert!(json["children"].is_array());
        // Leaf entries drop the children key entirely.
        let db = &json["children"][0]["children"][0];
        assert_eq!(db["title"], "Database");
        assert!(db.get("children").is_none());
    }
}
