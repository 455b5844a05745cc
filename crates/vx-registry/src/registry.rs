//! Snapshot holder with atomic republish.

use std::sync::{Arc, Mutex, RwLock};

use vx_source::PageSource;

use crate::builder::build;
use crate::error::BuildError;
use crate::index::RegistryIndex;

/// Owns the active [`RegistryIndex`] snapshot.
///
/// Readers take a snapshot with one `Arc` clone and keep querying it without
/// coordination; a reload builds a complete new index and swaps it in under
/// a single publish point. Readers see either the fully-old or fully-new
/// snapshot, never a partially built one, and a failed reload leaves the
/// previous snapshot active.
pub struct Registry {
    source: Arc<dyn PageSource>,
    logical_root: String,
    /// Active snapshot, swapped wholesale on reload.
    current: RwLock<Arc<RegistryIndex>>,
    /// Serializes reloads; never held while readers take snapshots.
    reload_lock: Mutex<()>,
}

impl Registry {
    /// Build the initial registry and wrap it for shared access.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the initial build fails; no registry
    /// exists in that case.
    pub fn load(
        logical_root: impl Into<String>,
        source: impl PageSource + 'static,
    ) -> Result<Self, BuildError> {
        let logical_root = logical_root.into();
        let source: Arc<dyn PageSource> = Arc::new(source);
        let index = build(&logical_root, source.as_ref())?;

        Ok(Self {
            source,
            logical_root,
            current: RwLock::new(Arc::new(index)),
            reload_lock: Mutex::new(()),
        })
    }

    /// The active snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RegistryIndex> {
        let guard = self.current.read().unwrap();
        Arc::clone(&guard)
    }

    /// Rebuild from source and publish the new snapshot atomically.
    ///
    /// On failure the previous snapshot stays active and the error is
    /// returned to the caller; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the rebuild fails.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn reload(&self) -> Result<Arc<RegistryIndex>, BuildError> {
        let _guard = self.reload_lock.lock().unwrap();

        let index = Arc::new(build(&self.logical_root, self.source.as_ref())?);
        *self.current.write().unwrap() = Arc::clone(&index);
        Ok(index)
    }
}
