//! The page entity.

use std::path::PathBuf;

use regex::Regex;

use crate::consts::DEFAULT_ORDER;
use crate::error::BuildError;
use crate::extract::{self, Field};

/// One indexed page.
#[derive(Debug, Clone)]
pub struct ViewNode {
    /// Key uniquely identifying this page. Defaults to the url when the
    /// page declares none.
    pub key: String,
    /// Canonical absolute url: leading slash, no trailing `index` segment.
    pub url: String,
    /// File the page was built from. Diagnostics only after load.
    pub source_path: PathBuf,
    /// Page title, empty when undeclared.
    pub title: String,
    /// Page description, empty when undeclared.
    pub description: String,
    /// Sibling sort order. Orders siblings only, never across levels.
    pub order: i32,
    /// When set, the page is visible only for matching version names.
    pub version_filter: Option<Regex>,
}

impl ViewNode {
    /// Build a node from page content.
    ///
    /// Missing fields fall back to defaults; a non-integer `Order` or an
    /// invalid `VersionNameRegex` pattern aborts the build.
    pub(crate) fn parse(
        source_path: PathBuf,
        url: String,
        content: &str,
    ) -> Result<Self, BuildError> {
        let title = extract::field(Field::Title, content).unwrap_or_default();
        let description = extract::field(Field::Description, content).unwrap_or_default();
        let key = extract::field(Field::Key, content).unwrap_or_else(|| url.clone());

        let order = match extract::field(Field::Order, content) {
            Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
                BuildError::malformed(
                    &source_path,
                    format!("Order value '{raw}' is not an integer"),
                )
            })?,
            None => DEFAULT_ORDER,
        };

        let version_filter = match extract::field(Field::VersionNameRegex, content) {
            Some(pattern) => Some(Regex::new(&pattern).map_err(|e| {
                BuildError::malformed(
                    &source_path,
                    format!("invalid VersionNameRegex '{pattern}': {e}"),
                )
            })?),
            None => None,
        };

        Ok(Self {
            key,
            url,
            source_path,
            title,
            description,
            order,
            version_filter,
        })
    }

    /// Whether this page is visible under the given current version.
    ///
    /// Always true when versioning is disabled (no current version) or the
    /// page carries no filter.
    #[must_use]
    pub fn visible_for(&self, current_version: Option<&str>) -> bool {
        match (&self.version_filter, current_version) {
            (Some(filter), Some(version)) => filter.is_match(version),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str, content: &str) -> Result<ViewNode, BuildError> {
        ViewNode::parse(PathBuf::from("/Views/test.page"), url.to_owned(), content)
    }

    #[test]
    fn test_parse_reads_all_fields() {
        let content = concat!(
            "Title = \"Database\";\n",
            "Key = \"config-db\";\n",
            "Description = \"Configuring the database.\";\n",
            "Order = \"1\";\n",
            "VersionNameRegex = \"^Net\";\n",
        );

        let node = parse("/Config/Db", content).unwrap();

        assert_eq!(node.key, "config-db");
        assert_eq!(node.title, "Database");
        assert_eq!(node.description, "Configuring the database.");
        assert_eq!(node.order, 1);
        assert!(node.version_filter.is_some());
    }

    #[test]
    fn test_parse_defaults_for_missing_fields() {
        let node = parse("/Config/Db", "").unwrap();

        assert_eq!(node.key, "/Config/Db");
        assert_eq!(node.title, "");
        assert_eq!(node.description, "");
        assert_eq!(node.order, 1000);
        assert!(node.version_filter.is_none());
    }

    #[test]
    fn test_parse_non_integer_order_is_malformed() {
        let err = parse("/Config/Db", r#"Order = "abc";"#).unwrap_err();

        assert!(matches!(err, BuildError::MalformedSource { .. }));
        assert!(err.to_string().contains("'abc' is not an integer"));
    }

    #[test]
    fn test_parse_negative_order_is_allowed() {
        let node = parse("/Config/Db", r#"Order = "-5";"#).unwrap();

        assert_eq!(node.order, -5);
    }

    #[test]
    fn test_parse_invalid_version_pattern_is_malformed() {
        let err = parse("/Config/Db", r#"VersionNameRegex = "(";"#).unwrap_err();

        assert!(matches!(err, BuildError::MalformedSource { .. }));
    }

    #[test]
    fn test_visible_for_no_filter_always_visible() {
        let node = parse("/a", "").unwrap();

        assert!(node.visible_for(None));
        assert!(node.visible_for(Some("NetJs")));
    }

    #[test]
    fn test_visible_for_filter_matches_current_version() {
        let node = parse("/a", r#"VersionNameRegex = "^Net";"#).unwrap();

        assert!(node.visible_for(Some("NetJs")));
        assert!(!node.visible_for(Some("NodeJs")));
    }

    #[test]
    fn test_visible_for_versioning_disabled_ignores_filter() {
        let node = parse("/a", r#"VersionNameRegex = "^Net";"#).unwrap();

        assert!(node.visible_for(None));
    }
}
