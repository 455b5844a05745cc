//! Fixed constants of the view namespace.

/// Logical prefix all content roots must live under.
pub const VIEWS_ROOT: &str = "/Views";

/// Url of the synthetic root owning all top-level pages.
///
/// The root is not user-facing and never appears in the key or node
/// collections.
pub const ROOT_URL: &str = "/";

/// Files whose base name starts with this character are partials or layout
/// files, never pages.
pub const PARTIAL_PREFIX: char = '_';

/// Sibling sort order used when a page declares none.
pub const DEFAULT_ORDER: i32 = 1000;
