//! Link descriptors.

use serde::Serialize;

use vx_registry::{LookupError, RegistryIndex, ViewNode};

/// A link to a page: where to and what to call it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    /// Link target url, optionally carrying a `#fragment`.
    pub url: String,
    /// Link text.
    pub title: String,
}

impl LinkRef {
    /// Link to a page under its own title.
    #[must_use]
    pub fn to(node: &ViewNode) -> Self {
        Self {
            url: node.url.clone(),
            title: node.title.clone(),
        }
    }

    /// Link to a fragment within a page.
    #[must_use]
    pub fn to_anchored(node: &ViewNode, fragment: &str) -> Self {
        Self {
            url: format!("{}#{fragment}", node.url),
            title: node.title.clone(),
        }
    }

    /// Link to a page by registry key.
    ///
    /// `title` overrides the page's own title; `fragment` is appended after
    /// a `#` when present.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::KeyNotFound`] when no page carries the key.
    pub fn by_key(
        index: &RegistryIndex,
        key: &str,
        title: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self, LookupError> {
        let node = index.by_key(key)?;
        let url = match fragment {
            Some(fragment) => format!("{}#{fragment}", node.url),
            None => node.url.clone(),
        };

        Ok(Self {
            url,
            title: title.unwrap_or(&node.title).to_owned(),
        })
    }
}
