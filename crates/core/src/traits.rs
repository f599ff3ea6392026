//! Core traits for world-state abstraction
//!
//! This module defines the WorldState trait that the record contract runs
//! against. Swapping the implementation (in-memory map, file-backed map,
//! a fault-injecting wrapper in tests) never touches the contract layer.

use std::sync::Arc;

use crate::error::Result;
use crate::range::StateRange;

/// Key-value world state the contract reads and writes
///
/// Keys are strings, values are opaque bytes. The contract stores canonical
/// JSON there, but the store never interprets values.
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
///
/// # Examples
///
/// ```ignore
/// use insurechain_core::WorldState;
///
/// fn count_keys(state: &dyn WorldState) -> insurechain_core::Result<usize> {
///     Ok(state.state_by_range("", "")?.len())
/// }
/// ```
pub trait WorldState: Send + Sync {
    /// Get the value stored under `key`
    ///
    /// Returns `None` if the key was never written or has been deleted.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` if the store cannot be read.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` if the write is rejected.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove `key`
    ///
    /// Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` if the delete is rejected.
    fn delete_state(&self, key: &str) -> Result<()>;

    /// Scan keys in `[start, end)` in ascending order
    ///
    /// An empty bound means unbounded on that side, so `("", "")` covers
    /// the whole store. The returned range reflects the state at the time
    /// of the call.
    ///
    /// # Errors
    ///
    /// Returns `StoreFailure` if the scan cannot be opened.
    fn state_by_range(&self, start: &str, end: &str) -> Result<StateRange>;
}

impl<T: WorldState + ?Sized> WorldState for Arc<T> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).put_state(key, value)
    }

    fn delete_state(&self, key: &str) -> Result<()> {
        (**self).delete_state(key)
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<StateRange> {
        (**self).state_by_range(start, end)
    }
}
