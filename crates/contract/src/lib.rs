//! Record contract for InsureChain
//!
//! This crate implements the contract operations over any `WorldState`:
//! - RecordContract: create/read/update/delete/exists/transfer/get_all,
//!   written once for all four record kinds
//! - Seed data and `init_ledger`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod seed;

pub use contract::RecordContract;
pub use seed::{seed_records, SEED_COUNT_PER_KIND};
