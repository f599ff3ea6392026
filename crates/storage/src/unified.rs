//! MemoryState: ordered in-memory world state
//!
//! This module implements the WorldState trait using:
//! - `BTreeMap<String, Vec<u8>>` for ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//! - `Arc` copy-on-write so a range scan can hold the map without a lock
//!
//! # Design Notes
//!
//! - **Copy-on-write**: opening a range clones the `Arc`, not the map. The
//!   next write after that clones the map once (`Arc::make_mut`), so
//!   outstanding ranges keep their point-in-time view.
//! - **Optional persistence**: a store opened with a path loads the snapshot
//!   file at open and rewrites it on `flush()`. Ephemeral stores have no path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use insurechain_core::{Result, StateMap, StateRange, WorldState};

use crate::snapshot;

/// In-memory world state with optional snapshot file
#[derive(Debug)]
pub struct MemoryState {
    /// Current contents; replaced wholesale on write when a range holds the old map
    data: RwLock<Arc<StateMap>>,
    /// Snapshot file, `None` for ephemeral stores
    path: Option<PathBuf>,
}

impl MemoryState {
    /// Create a new empty, ephemeral store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Arc::new(StateMap::new())),
            path: None,
        }
    }

    /// Open a store backed by a snapshot file
    ///
    /// Loads the file if it exists; a missing file yields an empty store
    /// that will be created on the first `flush()`.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Corruption` if its
    /// contents are not a snapshot.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = snapshot::load(&path)?.unwrap_or_default();
        info!(path = %path.display(), keys = data.len(), "Opened world state");
        Ok(Self {
            data: RwLock::new(Arc::new(data)),
            path: Some(path),
        })
    }

    /// Snapshot file backing this store, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if the store keeps nothing on disk
    pub fn is_ephemeral(&self) -> bool {
        self.path.is_none()
    }

    /// Write the current contents to the snapshot file
    ///
    /// No-op for ephemeral stores.
    pub fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = self.snapshot();
        snapshot::store(path, &data)?;
        info!(path = %path.display(), keys = data.len(), "Flushed world state");
        Ok(())
    }

    /// Point-in-time view of the whole store
    pub fn snapshot(&self) -> Arc<StateMap> {
        Arc::clone(&self.data.read())
    }

    /// Number of keys stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for MemoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for MemoryState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        debug!(key, bytes = value.len(), "put_state");
        let mut data = self.data.write();
        Arc::make_mut(&mut data).insert(key.to_string(), value);
        Ok(())
    }

    fn delete_state(&self, key: &str) -> Result<()> {
        debug!(key, "delete_state");
        let mut data = self.data.write();
        if data.contains_key(key) {
            Arc::make_mut(&mut data).remove(key);
        }
        Ok(())
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<StateRange> {
        Ok(StateRange::new(self.snapshot(), start, end))
    }
}
