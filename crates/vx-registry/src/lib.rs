//! View registry and tree construction for VX.
//!
//! This crate scans a directory of page-description files into an immutable,
//! queryable registry: a key index, a url index, and a page tree whose
//! hierarchy is inferred purely from url path structure.
//!
//! # Architecture
//!
//! - [`build`](builder::build) runs the two-pass build: pass one parses
//!   metadata out of every page file and indexes the resulting nodes by key
//!   and url; pass two links nodes to their parents in url order.
//! - [`RegistryIndex`] is the built snapshot. It is immutable and safe to
//!   share across threads without coordination.
//! - [`Registry`] owns the current snapshot and republishes it atomically on
//!   reload; readers always see a fully-built index or the previous one.
//!
//! # Example
//!
//! ```
//! use vx_registry::Registry;
//! use vx_source::MockPageSource;
//!
//! # fn main() -> Result<(), vx_registry::BuildError> {
//! let source = MockPageSource::new()
//!     .with_file("/Views/Guide/index.page", "Title = \"Guide\";");
//!
//! let registry = Registry::load("/Views", source)?;
//! let snapshot = registry.snapshot();
//! assert!(snapshot.by_url("/Guide").is_ok());
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod consts;
mod error;
pub mod extract;
mod index;
mod node;
mod registry;
pub mod url;

pub use builder::build;
pub use error::{BuildError, LookupError};
pub use index::RegistryIndex;
pub use node::ViewNode;
pub use registry::Registry;
