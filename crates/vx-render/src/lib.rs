//! Menu, breadcrumb and child-table rendering for VX.
//!
//! Renderers are read-only consumers of a [`RegistryIndex`](vx_registry::RegistryIndex)
//! snapshot. They take the current url and current version name per call,
//! never caching either, so every invocation reflects the request it
//! serves, and produce structured link descriptors. Turning those into
//! markup is the host's concern.

mod breadcrumbs;
mod link;
mod menu;
mod table;

pub use breadcrumbs::{Crumb, breadcrumbs};
pub use link::LinkRef;
pub use menu::{MenuItem, menu};
pub use table::{ChildRow, child_rows};
