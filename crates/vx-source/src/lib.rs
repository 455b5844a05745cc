//! Page source abstraction for VX.
//!
//! A [`PageSource`] supplies the registry builder with everything it needs
//! from the environment: mapping a logical content root to a filesystem
//! directory, enumerating page files, and reading their content. The
//! registry itself never touches the filesystem directly, which keeps the
//! build testable against an in-memory source.
//!
//! Backends:
//! - [`FsPageSource`]: reads page files from a site directory on disk.
//! - `MockPageSource`: in-memory source for tests (behind the `mock`
//!   feature).

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use fs::FsPageSource;
#[cfg(feature = "mock")]
pub use mock::MockPageSource;
pub use source::{PAGE_FILE_EXTENSION, PageSource, SourceError};
