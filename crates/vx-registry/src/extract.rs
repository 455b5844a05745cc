//! Metadata extraction from page content.
//!
//! Page files declare metadata through plain assignments:
//!
//! ```text
//! Title = "Getting Started";
//! Order = "20";
//! ```
//!
//! Extraction is a pattern search, not a parse: the first assignment of the
//! requested field wins, `.` matches newlines so values may span lines, the
//! value capture is non-greedy, and field names are case-sensitive. No
//! unescaping is performed, so values must not contain `"` themselves.

use std::sync::LazyLock;

use regex::Regex;

fn assignment(name: &str) -> Regex {
    Regex::new(&format!(r#"(?s){name}\s*=\s*"(.+?)";"#)).unwrap()
}

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| assignment("Title"));
static KEY_RE: LazyLock<Regex> = LazyLock::new(|| assignment("Key"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| assignment("Description"));
static ORDER_RE: LazyLock<Regex> = LazyLock::new(|| assignment("Order"));
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| assignment("VersionNameRegex"));

/// Metadata fields recognized in page files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Page title.
    Title,
    /// Stable page key; the url stands in when absent.
    Key,
    /// Page description, shown in child listings.
    Description,
    /// Sibling sort order, a base-10 integer.
    Order,
    /// Visibility filter matched against the current version name.
    VersionNameRegex,
}

impl Field {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Title => &TITLE_RE,
            Self::Key => &KEY_RE,
            Self::Description => &DESCRIPTION_RE,
            Self::Order => &ORDER_RE,
            Self::VersionNameRegex => &VERSION_RE,
        }
    }
}

/// Extract a metadata field from page content.
///
/// Returns the first match's value, or `None` when the page does not
/// declare the field.
#[must_use]
pub fn field(field: Field, content: &str) -> Option<String> {
    field
        .pattern()
        .captures(content)
        .map(|captures| captures[1].to_owned())
}
