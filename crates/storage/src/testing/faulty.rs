//! Fault-injecting world state

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use tracing::debug;

use insurechain_core::{Error, Result, StateRange, WorldState};

use crate::unified::MemoryState;

/// World-state call that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultPoint {
    /// `get_state`
    Get,
    /// `put_state`
    Put,
    /// `delete_state`
    Delete,
    /// `state_by_range`
    Range,
}

impl fmt::Display for FaultPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultPoint::Get => "get",
            FaultPoint::Put => "put",
            FaultPoint::Delete => "delete",
            FaultPoint::Range => "range",
        };
        f.write_str(name)
    }
}

/// MemoryState wrapper that rejects armed calls with `StoreFailure`
///
/// A fault can be armed immediately or after a number of successful calls,
/// which lets a test fail the N-th write of a multi-write operation.
#[derive(Debug, Default)]
pub struct FaultyState {
    inner: MemoryState,
    /// Armed points and the successes still allowed before failing
    armed: Mutex<HashMap<FaultPoint, usize>>,
}

impl FaultyState {
    /// Create an empty store with nothing armed
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call at `point` from now on
    pub fn arm(&self, point: FaultPoint) {
        self.arm_after(point, 0);
    }

    /// Let `successes` calls at `point` through, then fail the rest
    pub fn arm_after(&self, point: FaultPoint, successes: usize) {
        self.armed.lock().insert(point, successes);
    }

    /// Stop failing calls at `point`
    pub fn disarm(&self, point: FaultPoint) {
        self.armed.lock().remove(&point);
    }

    /// Stop failing anything
    pub fn disarm_all(&self) {
        self.armed.lock().clear();
    }

    /// Underlying store, bypassing fault injection
    pub fn inner(&self) -> &MemoryState {
        &self.inner
    }

    fn check(&self, point: FaultPoint) -> Result<()> {
        let mut armed = self.armed.lock();
        match armed.get_mut(&point) {
            Some(0) => {
                debug!(%point, "Injected store failure");
                Err(Error::store_failure(format!("injected {} failure", point)))
            }
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl WorldState for FaultyState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.check(FaultPoint::Get)?;
        self.inner.get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.check(FaultPoint::Put)?;
        self.inner.put_state(key, value)
    }

    fn delete_state(&self, key: &str) -> Result<()> {
        self.check(FaultPoint::Delete)?;
        self.inner.delete_state(key)
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<StateRange> {
        self.check(FaultPoint::Range)?;
        self.inner.state_by_range(start, end)
    }
}
