//! World-state storage for InsureChain
//!
//! This crate implements the `WorldState` trait with:
//! - MemoryState: BTreeMap-based store behind a `parking_lot::RwLock`
//! - Copy-on-write snapshots backing `StateRange` scans
//! - Snapshot file persistence (load on open, atomic rewrite on flush)
//! - FaultyState: fault-injecting wrapper for failure-path tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod snapshot;
pub mod testing;
pub mod unified;

pub use snapshot::SNAPSHOT_FORMAT;
pub use unified::MemoryState;
