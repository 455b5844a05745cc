//! Url derivation and normalization.
//!
//! Page urls are derived from file locations: the filesystem views root is
//! stripped, separators become `/`, the page extension is removed, and a
//! trailing `index` segment collapses onto the parent directory
//! (`/a/index` → `/a`). The same collapse is applied to every url used for
//! lookup, so `/a/index` and `/a` always resolve to the same page.

use std::path::Path;

use vx_source::PAGE_FILE_EXTENSION;

use crate::consts::ROOT_URL;
use crate::error::BuildError;

/// Derive the canonical url for a page file.
///
/// `views_root` is the filesystem directory the views root maps to; the file
/// must live under it and carry the page extension.
///
/// # Errors
///
/// Returns [`BuildError::MalformedSource`] for files outside the views root
/// or without the page extension.
pub fn derive_url(file: &Path, views_root: &Path) -> Result<String, BuildError> {
    let relative = file.strip_prefix(views_root).map_err(|_| {
        BuildError::malformed(file, format!("not under {}", views_root.display()))
    })?;

    let relative = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let Some(stem) = relative.strip_suffix(PAGE_FILE_EXTENSION) else {
        return Err(BuildError::malformed(
            file,
            format!("does not end with {PAGE_FILE_EXTENSION}"),
        ));
    };

    Ok(trim_trailing_index(&format!("/{stem}")))
}

/// Collapse a trailing `index` segment onto its parent.
///
/// `/a/index` → `/a`, `/index` → `/`, everything else is unchanged. The
/// segment is compared case-insensitively; only a whole trailing segment is
/// collapsed, so `/myindex` keeps its name.
#[must_use]
pub fn trim_trailing_index(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((parent, last)) if last.eq_ignore_ascii_case("index") => {
            if parent.is_empty() {
                ROOT_URL.to_owned()
            } else {
                parent.to_owned()
            }
        }
        _ => url.to_owned(),
    }
}

/// Canonicalize a url for lookup: leading slash, no trailing slash, no
/// trailing `index` segment.
#[must_use]
pub fn normalize(url: &str) -> String {
    let mut url = if url.starts_with('/') {
        url.to_owned()
    } else {
        format!("/{url}")
    };
    while url.len() > 1 && url.ends_with('/') {
        url.pop();
    }
    trim_trailing_index(&url)
}

/// Url of the node owning this one: the url minus its last segment.
///
/// Returns `None` for the root itself; top-level urls return the root url.
#[must_use]
pub fn parent(url: &str) -> Option<String> {
    if url == ROOT_URL {
        return None;
    }
    match url.rsplit_once('/') {
        Some(("", _)) => Some(ROOT_URL.to_owned()),
        Some((parent, _)) => Some(parent.to_owned()),
        None => None,
    }
}

/// Number of path segments; `/` has zero.
#[must_use]
pub fn depth(url: &str) -> usize {
    url.split('/').filter(|s| !s.is_empty()).count()
}

/// Path segments of a url, outermost first.
#[must_use]
pub fn segments(url: &str) -> Vec<&str> {
    url.split('/').filter(|s| !s.is_empty()).collect()
}
