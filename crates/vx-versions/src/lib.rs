//! Site version descriptors and resolution for VX.
//!
//! A site may serve several versions of its content (say, one per product
//! line). Pages opt in or out of a version through their visibility filter;
//! this crate owns the version descriptors themselves and resolves which
//! version a request is for. How the requested version name reaches the
//! application (query parameter, subdomain, cookie) is the host's business;
//! callers hand in an optional url name and get back the version to serve.

use serde::Deserialize;

/// One selectable site version.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    /// Name used by page visibility filters.
    pub name: String,
    /// Name used in urls to request this version.
    pub url_name: String,
    /// Label shown in a version switcher.
    pub caption: String,
    /// When set, switcher links for this version point here instead of a
    /// derived url.
    #[serde(default)]
    pub url_override: Option<String>,
    /// Served when no version is requested. Exactly one version must be the
    /// default.
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

/// Error building a [`VersionSet`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VersionSetError {
    /// Not exactly one version marked as default.
    #[error("exactly one version must be the default, found {0}")]
    DefaultCount(usize),
    /// Two versions share a name.
    #[error("duplicate version name '{0}'")]
    DuplicateName(String),
    /// Two versions share a url name.
    #[error("duplicate version url name '{0}'")]
    DuplicateUrlName(String),
}

/// The set of versions a site serves.
///
/// An empty set means versioning is disabled: there is no current version
/// and every page is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionSet {
    versions: Vec<VersionInfo>,
}

impl VersionSet {
    /// Validate and wrap a list of versions.
    ///
    /// An empty list is valid (versioning disabled). A non-empty list must
    /// name exactly one default and carry no duplicate names or url names.
    ///
    /// # Errors
    ///
    /// Returns [`VersionSetError`] when validation fails.
    pub fn new(versions: Vec<VersionInfo>) -> Result<Self, VersionSetError> {
        if !versions.is_empty() {
            let defaults = versions.iter().filter(|v| v.is_default).count();
            if defaults != 1 {
                return Err(VersionSetError::DefaultCount(defaults));
            }

            for (i, version) in versions.iter().enumerate() {
                for earlier in &versions[..i] {
                    if earlier.name == version.name {
                        return Err(VersionSetError::DuplicateName(version.name.clone()));
                    }
                    if earlier.url_name == version.url_name {
                        return Err(VersionSetError::DuplicateUrlName(
                            version.url_name.clone(),
                        ));
                    }
                }
            }
        }

        Ok(Self { versions })
    }

    /// True when versioning is disabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// All versions, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &VersionInfo> {
        self.versions.iter()
    }

    /// The default version, `None` when versioning is disabled.
    #[must_use]
    pub fn default_version(&self) -> Option<&VersionInfo> {
        self.versions.iter().find(|v| v.is_default)
    }

    /// Look up a version by its name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&VersionInfo> {
        self.versions.iter().find(|v| v.name == name)
    }

    /// Look up a version by its url name.
    #[must_use]
    pub fn by_url_name(&self, url_name: &str) -> Option<&VersionInfo> {
        self.versions.iter().find(|v| v.url_name == url_name)
    }

    /// Resolve a requested url name to the version to serve.
    ///
    /// An unknown or absent request resolves to the default version.
    /// `None` only when versioning is disabled.
    #[must_use]
    pub fn resolve(&self, requested_url_name: Option<&str>) -> Option<&VersionInfo> {
        requested_url_name
            .and_then(|name| self.by_url_name(name))
            .or_else(|| self.default_version())
    }

    /// The current version name for visibility filtering.
    ///
    /// Shorthand for [`resolve`](Self::resolve) when only the name matters.
    #[must_use]
    pub fn current_name(&self, requested_url_name: Option<&str>) -> Option<&str> {
        self.resolve(requested_url_name).map(|v| v.name.as_str())
    }
}
