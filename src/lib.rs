//! InsureChain - insurance-claim records on a ledger world state
//!
//! Four record kinds share one contract surface: customers, insurers,
//! insured objects (claims) and banks. Each can be created, read,
//! updated, deleted, checked for existence, transferred to a new owner and
//! listed in full, with records stored as canonical JSON.
//!
//! # Quick Start
//!
//! ```ignore
//! use insurechain::{Ledger, OpenOptions};
//!
//! let ledger = Ledger::open(".insurechain/state.json", OpenOptions::new().init_ledger(true))?;
//!
//! ledger.create_customer(13u64, "Customer", "xyyx")?;
//! let previous = ledger.transfer_customer(1u64, "Tom")?;
//! let customers = ledger.get_all_customers()?;
//! ledger.flush()?;
//! ```
//!
//! # Architecture
//!
//! All transactions go through the [`Executor`], which dispatches a
//! [`Command`] to the record contract. The [`Ledger`] struct provides a
//! typed interface and owns the world state.
//!
//! Storage and contract internals are not exposed here; only the executor
//! API is public.

// Re-export the public API from insurechain-executor
pub use insurechain_executor::*;
