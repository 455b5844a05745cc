//! The built, queryable registry snapshot.
//!
//! Nodes are stored in a flat `Vec` with parent/children relationships
//! tracked by indices, giving O(1) key and url lookups and cheap ordered
//! traversal. The synthetic root is implicit: it owns the `root_children`
//! list, sits at the root url, and never appears among the nodes.

use std::collections::HashMap;

use crate::consts::ROOT_URL;
use crate::error::LookupError;
use crate::node::ViewNode;
use crate::url;

/// Immutable view registry snapshot.
///
/// Safe to share across threads; all queries are read-only.
#[derive(Debug)]
pub struct RegistryIndex {
    nodes: Vec<ViewNode>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    root_children: Vec<usize>,
    key_index: HashMap<String, usize>,
    url_index: HashMap<String, usize>,
}

impl RegistryIndex {
    pub(crate) fn new(
        nodes: Vec<ViewNode>,
        children: Vec<Vec<usize>>,
        parents: Vec<Option<usize>>,
        root_children: Vec<usize>,
        key_index: HashMap<String, usize>,
        url_index: HashMap<String, usize>,
    ) -> Self {
        Self {
            nodes,
            children,
            parents,
            root_children,
            key_index,
            url_index,
        }
    }

    /// Number of indexed pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no pages are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All indexed pages, in build order.
    pub fn nodes(&self) -> impl Iterator<Item = &ViewNode> {
        self.nodes.iter()
    }

    /// Look up a page by its key.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::KeyNotFound`] when no page carries the key.
    pub fn by_key(&self, key: &str) -> Result<&ViewNode, LookupError> {
        self.key_index
            .get(key)
            .map(|&idx| &self.nodes[idx])
            .ok_or_else(|| LookupError::KeyNotFound(key.to_owned()))
    }

    /// Look up a page by url.
    ///
    /// The url is canonicalized first, so `/a/index`, `a` and `/a/` all
    /// resolve to the page at `/a`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UrlNotFound`] when no page sits at the url.
    pub fn by_url(&self, url: &str) -> Result<&ViewNode, LookupError> {
        let url = url::normalize(url);
        self.index_of(&url).map(|idx| &self.nodes[idx])
    }

    /// The parent page of the page at `url`, or `None` for top-level pages.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UrlNotFound`] when no page sits at the url.
    pub fn parent_of(&self, url: &str) -> Result<Option<&ViewNode>, LookupError> {
        let url = url::normalize(url);
        let idx = self.index_of(&url)?;
        Ok(self.parents[idx].map(|p| &self.nodes[p]))
    }

    /// Children of the page at `url`, visible under `current_version`,
    /// ordered by (order, url).
    ///
    /// The root url yields the top-level pages. Unknown urls yield an empty
    /// list.
    #[must_use]
    pub fn visible_children(&self, url: &str, current_version: Option<&str>) -> Vec<&ViewNode> {
        let url = url::normalize(url);
        let ids = if url == ROOT_URL {
            &self.root_children
        } else {
            match self.url_index.get(&url) {
                Some(&idx) => &self.children[idx],
                None => return Vec::new(),
            }
        };

        ids.iter()
            .map(|&idx| &self.nodes[idx])
            .filter(|node| node.visible_for(current_version))
            .collect()
    }

    fn index_of(&self, normalized_url: &str) -> Result<usize, LookupError> {
        self.url_index
            .get(normalized_url)
            .copied()
            .ok_or_else(|| LookupError::UrlNotFound(normalized_url.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vx_source::MockPageSource;

    use super::*;
    use crate::builder::build;

    fn sample_index() -> RegistryIndex {
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
                concat!(
                    "Title = \"Database\";\n",
                    "Key = \"config-db\";\n",
                    "Description = \"Configuring the database.\";\n",
                    "Order = \"1\";",
                ),
            )
            .with_file(
                "/Views/Documentation/Config/Logging.page",
                "Title = \"Logging\";\nOrder = \"1\";\nVersionNameRegex = \"^Net\";",
            );
        build("/Views/Documentation", &source).unwrap()
    }

    #[test]
    fn test_by_key_finds_declared_key() {
        let index = sample_index();

        let node = index.by_key("config-db").unwrap();

        assert_eq!(node.url, "/Documentation/Config/Db");
        assert_eq!(node.title, "Database");
    }

    #[test]
    fn test_by_key_falls_back_to_url_key() {
        let index = sample_index();

        // No Key declared, so the url doubles as the key.
        let node = index.by_key("/Documentation/Config").unwrap();

        assert_eq!(node.title, "Config");
    }

    #[test]
    fn test_by_key_unknown_is_error() {
        let index = sample_index();

        assert_eq!(
            index.by_key("nope").unwrap_err(),
            LookupError::KeyNotFound("nope".to_owned())
        );
    }

    #[test]
    fn test_by_url_roundtrips_every_node() {
        let index = sample_index();

        for node in index.nodes() {
            let found = index.by_url(&node.url).unwrap();
            assert_eq!(found.url, node.url);
            let found = index.by_key(&node.key).unwrap();
            assert_eq!(found.key, node.key);
        }
    }

    #[test]
    fn test_by_url_normalizes_lookup() {
        let index = sample_index();

        let canonical = index.by_url("/Documentation/Config").unwrap().url.clone();

        assert_eq!(index.by_url("/Documentation/Config/index").unwrap().url, canonical);
        assert_eq!(index.by_url("Documentation/Config/").unwrap().url, canonical);
    }

    #[test]
    fn test_by_url_unknown_is_error() {
        let index = sample_index();

        assert_eq!(
            index.by_url("/Documentation/Missing").unwrap_err(),
            LookupError::UrlNotFound("/Documentation/Missing".to_owned())
        );
    }

    #[test]
    fn test_parent_of_links_to_url_parent() {
        let index = sample_index();

        let parent = index.parent_of("/Documentation/Config/Db").unwrap().unwrap();

        assert_eq!(parent.url, "/Documentation/Config");
    }

    #[test]
    fn test_parent_of_top_level_is_none() {
        let index = sample_index();

        assert!(index.parent_of("/Documentation").unwrap().is_none());
    }

    #[test]
    fn test_visible_children_orders_by_order_then_url() {
        let index = sample_index();

        let children = index.visible_children("/Documentation/Config", None);

        // Same Order=1: Db before Logging by url tie-break.
        let urls: Vec<_> = children.iter().map(|n| n.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["/Documentation/Config/Db", "/Documentation/Config/Logging"]
        );
    }

    #[test]
    fn test_visible_children_applies_version_filter() {
        let index = sample_index();

        let children = index.visible_children("/Documentation/Config", Some("NodeJs"));

        let urls: Vec<_> = children.iter().map(|n| n.url.as_str()).collect();
        assert_eq!(urls, vec!["/Documentation/Config/Db"]);
    }

    #[test]
    fn test_visible_children_of_root_are_top_level_pages() {
        let index = sample_index();

        let top = index.visible_children("/", None);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].url, "/Documentation");
    }

    #[test]
    fn test_visible_children_unknown_url_is_empty() {
        let index = sample_index();

        assert!(index.visible_children("/Documentation/Missing", None).is_empty());
    }
}
