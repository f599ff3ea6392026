//! Ledger Integration Tests
//!
//! End-to-end tests through the executor, covering:
//! - Command dispatch for every record kind
//! - Error semantics (AlreadyExists, NotFound, StoreFailure, AccessDenied)
//! - GetAll ordering and lenient decoding
//! - Snapshot persistence across reopen

mod common;

mod bank;
mod customer;
mod insurance;
mod insurance_object;
mod persistence;
mod store_failures;
