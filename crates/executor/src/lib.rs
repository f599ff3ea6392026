//! # InsureChain Executor
//!
//! The public API for the InsureChain record contract.
//!
//! This is the only crate users need to import. It provides:
//! - [`Ledger`] - Typed interface over the four record kinds
//! - [`Command`]/[`Output`] - Low-level transaction interface (for clients and the CLI)
//! - [`Executor`] - Stateless dispatcher, including platform-style `invoke(function, args)`
//!
//! ## Quick Start
//!
//! ```text
//! use insurechain_executor::{Ledger, OpenOptions};
//!
//! // Open a ledger, seeding it if the state file is new
//! let ledger = Ledger::open(".insurechain/state.json", OpenOptions::new().init_ledger(true))?;
//!
//! // Submit a transaction
//! ledger.create_customer(13u64, "Customer", "xyyx")?;
//!
//! // Evaluate a transaction
//! let json = ledger.read_customer(13u64)?;
//! ledger.flush()?;
//! ```
//!
//! ## Record Kinds
//!
//! | Kind | Id field | Other fields |
//! |------|----------|--------------|
//! | **Customer** | `CustomerId` | `Role`, `Name` |
//! | **Insurance** | `InsuranceId` | `Role`, `Name` |
//! | **InsuranceObject** | `InsuranceId` | `Type`, `Status`, `Amount`, `Adhar`, `DamageImages`, `VerifiedInvoice` |
//! | **Bank** | `BankId` | `Role`, `Name` |
//!
//! Every kind also carries `Owner` once transferred.

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod ledger;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::{function_params, Command, FUNCTION_NAMES};
pub use error::Error;
pub use executor::Executor;
pub use ledger::Ledger;
pub use output::Output;

// Re-export record types so users don't need insurechain-core directly
pub use insurechain_core::{
    Bank, ClaimStatus, Customer, Insurance, InsuranceObject, RecordId, RecordKind, WorldState,
};

// Re-export security types so users don't need insurechain-security directly
pub use insurechain_security::{AccessMode, OpenOptions};

// Re-export the default world state
pub use insurechain_storage::MemoryState;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
