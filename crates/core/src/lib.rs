//! Core types and traits for InsureChain
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordKind / RecordId: what a record is and how it is identified
//! - StateKey: per-kind keyspace encoding inside the world state
//! - Records: Customer, Insurance, InsuranceObject, Bank (one struct per kind)
//! - Canonical JSON: deterministic, key-sorted encoding applied on every write
//! - Error: Error type hierarchy
//! - Traits: the `WorldState` key-value interface and its `StateRange` scan

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod error;
pub mod range;
pub mod record;
pub mod traits;
pub mod types;

pub use canonical::{encode_canonical, encode_string, to_canonical_string};
pub use error::{Error, Result};
pub use range::{StateMap, StateRange, StateRangeIter};
pub use record::{AnyRecord, Bank, ClaimStatus, Customer, Insurance, InsuranceObject, Record};
pub use traits::WorldState;
pub use types::{RecordId, RecordKind, StateKey, KEY_SEPARATOR};
