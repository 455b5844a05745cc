//! Two-pass registry construction.
//!
//! Pass one enumerates page files, parses each into a [`ViewNode`], and
//! commits the key and url indexes. Pass two walks the nodes sorted
//! ascending by url (a parent's url always sorts before its children's)
//! and attaches every node to the node at its parent url. Sibling lists are
//! then sorted by (order, url).
//!
//! The build is all-or-nothing: any malformed page, collision, or source
//! failure aborts it and nothing is published.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use vx_source::PageSource;

use crate::consts::{PARTIAL_PREFIX, ROOT_URL, VIEWS_ROOT};
use crate::error::BuildError;
use crate::index::RegistryIndex;
use crate::node::ViewNode;
use crate::url;

/// Build a registry from all page files under `logical_root`.
///
/// # Errors
///
/// Returns [`BuildError::Configuration`] when `logical_root` is not under
/// the views root, [`BuildError::MalformedSource`] for structural page
/// defects (wrong extension, bad order value, invalid version pattern, key
/// or url collisions), and [`BuildError::Source`] when enumeration or
/// reading fails.
pub fn build(logical_root: &str, source: &dyn PageSource) -> Result<RegistryIndex, BuildError> {
    if !logical_root.starts_with(VIEWS_ROOT) {
        return Err(BuildError::Configuration(logical_root.to_owned()));
    }

    let views_root = source.map_root(VIEWS_ROOT);
    let scan_root = source.map_root(logical_root);

    let mut files = source.enumerate(&scan_root)?;
    // Deterministic traversal regardless of enumeration order.
    files.sort();

    let mut nodes: Vec<ViewNode> = Vec::new();
    let mut key_index: HashMap<String, usize> = HashMap::new();
    let mut url_index: HashMap<String, usize> = HashMap::new();

    for file in files {
        if is_partial(&file) {
            tracing::debug!(path = %file.display(), "skipping partial");
            continue;
        }

        let content = source.read(&file)?;
        let page_url = url::derive_url(&file, &views_root)?;
        if page_url == ROOT_URL {
            return Err(BuildError::malformed(
                &file,
                format!("url '{ROOT_URL}' is reserved for the site root"),
            ));
        }

        let node = ViewNode::parse(file, page_url, &content)?;
        let idx = nodes.len();

        match url_index.entry(node.url.clone()) {
            Entry::Occupied(existing) => {
                return Err(BuildError::malformed(
                    &node.source_path,
                    format!(
                        "url '{}' already registered by {}",
                        node.url,
                        nodes[*existing.get()].source_path.display()
                    ),
                ));
            }
            Entry::Vacant(entry) => {
                entry.insert(idx);
            }
        }

        match key_index.entry(node.key.clone()) {
            Entry::Occupied(existing) => {
                return Err(BuildError::malformed(
                    &node.source_path,
                    format!(
                        "key '{}' already registered by {}",
                        node.key,
                        nodes[*existing.get()].source_path.display()
                    ),
                ));
            }
            Entry::Vacant(entry) => {
                entry.insert(idx);
            }
        }

        tracing::debug!(url = %node.url, key = %node.key, "indexed page");
        nodes.push(node);
    }

    // Second pass: attach children in ascending url order, so a parent is
    // always linked before any of its descendants.
    let mut by_url: Vec<usize> = (0..nodes.len()).collect();
    by_url.sort_by(|&a, &b| nodes[a].url.cmp(&nodes[b].url));

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut parents: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut root_children: Vec<usize> = Vec::new();

    for &idx in &by_url {
        match find_parent(&nodes[idx].url, &url_index) {
            Some(parent_idx) => {
                children[parent_idx].push(idx);
                parents[idx] = Some(parent_idx);
            }
            None => root_children.push(idx),
        }
    }

    // Sibling ordering: order is primary, url breaks ties. Urls are unique,
    // so the sort is total.
    let rank = |&a: &usize, &b: &usize| {
        nodes[a]
            .order
            .cmp(&nodes[b].order)
            .then_with(|| nodes[a].url.cmp(&nodes[b].url))
    };
    for list in &mut children {
        list.sort_by(rank);
    }
    root_children.sort_by(rank);

    tracing::debug!(pages = nodes.len(), "registry built");
    Ok(RegistryIndex::new(
        nodes,
        children,
        parents,
        root_children,
        key_index,
        url_index,
    ))
}

/// Partials and layout files are never pages.
fn is_partial(file: &Path) -> bool {
    file.file_name()
        .is_none_or(|name| name.to_string_lossy().starts_with(PARTIAL_PREFIX))
}

/// Nearest indexed ancestor of `page_url`, `None` when only the synthetic
/// root remains.
fn find_parent(page_url: &str, url_index: &HashMap<String, usize>) -> Option<usize> {
    let mut current = url::parent(page_url);
    while let Some(parent_url) = current {
        if parent_url == ROOT_URL {
            return None;
        }
        if let Some(&idx) = url_index.get(&parent_url) {
            return Some(idx);
        }
        current = url::parent(&parent_url);
    }
    None
}
