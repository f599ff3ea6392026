//! Error types for InsureChain
//!
//! This module defines the error taxonomy shared by the store, the contract
//! and the command layer. We use `thiserror` for automatic `Display` and
//! `Error` trait implementations.
//!
//! The `AlreadyExists` and `NotFound` messages are part of the contract
//! surface: clients match on them, so their wording is fixed.

use std::io;
use thiserror::Error;

use crate::types::{RecordId, RecordKind};

/// Result type alias for InsureChain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record contract and its world state
#[derive(Debug, Error)]
pub enum Error {
    /// Create was called for an id that is already stored for this kind
    #[error("The {kind} {id} already exists")]
    AlreadyExists {
        /// Record kind
        kind: RecordKind,
        /// Conflicting id
        id: RecordId,
    },

    /// Read/Update/Delete/Transfer was called for an id with no stored value
    #[error("The {kind} {id} does not exist")]
    NotFound {
        /// Record kind
        kind: RecordKind,
        /// Missing id
        id: RecordId,
    },

    /// The underlying world state rejected a get/put/delete/range call
    #[error("Store failure: {0}")]
    StoreFailure(String),

    /// Record encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Malformed argument (non-numeric id, unknown claim status, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Snapshot file contents could not be understood
    #[error("Data corruption: {0}")]
    Corruption(String),

    /// I/O error (snapshot file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a `StoreFailure` from any displayable cause
    pub fn store_failure(cause: impl std::fmt::Display) -> Self {
        Error::StoreFailure(cause.to_string())
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is an already-exists error
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }

    /// Check if the failure came from the world state
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Error::StoreFailure(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound {
            kind: RecordKind::Customer,
            id: RecordId::new(2),
        };
        assert_eq!(err.to_string(), "The Customer 2 does not exist");
    }

    #[test]
    fn test_error_display_already_exists() {
        let err = Error::AlreadyExists {
            kind: RecordKind::InsuranceObject,
            id: RecordId::new(13),
        };
        assert_eq!(err.to_string(), "The InsuranceObject 13 already exists");
    }

    #[test]
    fn test_error_display_store_failure() {
        let err = Error::store_failure("failed inserting key");
        let msg = err.to_string();
        assert!(msg.contains("Store failure"));
        assert!(msg.contains("failed inserting key"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let result: Result<serde_json::Value> =
            serde_json::from_str("{not json").map_err(Error::from);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_error_predicates() {
        let nf = Error::NotFound {
            kind: RecordKind::Bank,
            id: RecordId::new(1),
        };
        assert!(nf.is_not_found());
        assert!(!nf.is_already_exists());
        assert!(Error::store_failure("x").is_store_failure());
    }
}
