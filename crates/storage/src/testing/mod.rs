//! Testing utilities for the world state
//!
//! - **FaultyState**: a MemoryState that can be armed to reject calls, used
//!   to check that store failures propagate out of the contract untouched
//!
//! # Example
//!
//! ```ignore
//! use insurechain_storage::testing::{FaultPoint, FaultyState};
//!
//! let state = FaultyState::new();
//! state.arm(FaultPoint::Put);
//! assert!(state.put_state("k", b"v".to_vec()).is_err());
//! ```

mod faulty;

pub use faulty::{FaultPoint, FaultyState};
