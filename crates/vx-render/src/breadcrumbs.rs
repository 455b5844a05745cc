//! Breadcrumb rendering.

use serde::Serialize;

use vx_registry::{LookupError, RegistryIndex, url};

/// One breadcrumb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display title.
    pub title: String,
    /// Link target. `None` for the final crumb, which renders as plain
    /// title text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Build the breadcrumb trail for the current url.
///
/// Urls at or directly below a top-level section (fewer than three path
/// segments) produce no trail. The top-level section itself is implicit and
/// never emitted; every partial path after it resolves to its page, linked
/// except for the final crumb.
///
/// # Errors
///
/// Returns [`LookupError::UrlNotFound`] when an intermediate path has no
/// page. Every ancestor path of a valid url must itself be a valid page
/// url, so a miss means the url namespace and the page set disagree: a
/// data-integrity defect in the content, not a transient condition.
pub fn breadcrumbs(index: &RegistryIndex, current_url: &str) -> Result<Vec<Crumb>, LookupError> {
    let current = url::normalize(current_url);
    let segments = url::segments(&current);
    if segments.len() < 3 {
        return Ok(Vec::new());
    }

    let mut crumbs = Vec::with_capacity(segments.len() - 1);
    let mut path = format!("/{}", segments[0]);

    for (i, segment) in segments.iter().enumerate().skip(1) {
        path.push('/');
        path.push_str(segment);

        let node = index.by_url(&path)?;
        let last = i == segments.len() - 1;
        crumbs.push(Crumb {
            title: node.title.clone(),
            url: (!last).then(|| node.url.clone()),
        });
    }

    Ok(crumbs)
}
