//! Child-listing tables.

use serde::Serialize;

use vx_registry::{RegistryIndex, ViewNode, url};

use crate::link::LinkRef;

/// One row of a child-listing table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChildRow {
    /// Link to the child page.
    pub link: LinkRef,
    /// The child page's description.
    pub description: String,
}

/// List the pages directly below the current url as table rows.
///
/// Rows are the visible pages exactly one level deeper than `current_url`
/// and url-prefixed by it, ordered by (order, url). An empty vector means
/// the page has nothing to list.
#[must_use]
pub fn child_rows(
    index: &RegistryIndex,
    current_url: &str,
    current_version: Option<&str>,
) -> Vec<ChildRow> {
    let current = url::normalize(current_url);
    let child_depth = url::depth(&current) + 1;
    let prefix = if current == "/" {
        "/".to_owned()
    } else {
        format!("{current}/")
    };

    let mut children: Vec<&ViewNode> = index
        .nodes()
        .filter(|node| {
            url::depth(&node.url) == child_depth
                && node.url.starts_with(&prefix)
                && node.visible_for(current_version)
        })
        .collect();
    children.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.url.cmp(&b.url)));

    children
        .into_iter()
        .map(|node| ChildRow {
            link: LinkRef::to(node),
            description: node.description.clone(),
        })
        .collect()
}
