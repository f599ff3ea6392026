//! Error types for transaction execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from internal errors

use insurechain_core::{RecordId, RecordKind};
use serde::{Deserialize, Serialize};

/// Transaction execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Lifecycle | `AlreadyExists`, `NotFound` | Record presence violated the operation |
/// | Validation | `InvalidArgument`, `UnknownFunction` | Bad invocation |
/// | Access | `AccessDenied` | Write submitted to a read-only ledger |
/// | System | `StoreFailure`, `Serialization`, `Corruption`, `Io`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use insurechain_executor::{Error, Executor};
///
/// match executor.invoke("ReadCustomer", &["2"]) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::NotFound { kind, id }) => {
///         println!("{} {} is missing", kind, id);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Lifecycle ====================
    /// Create or InitLedger hit an id that is already stored
    #[error("The {kind} {id} already exists")]
    AlreadyExists {
        /// Record kind.
        kind: RecordKind,
        /// Record id.
        id: RecordId,
    },

    /// Read, Update, Delete or Transfer of an id that is not stored
    #[error("The {kind} {id} does not exist")]
    NotFound {
        /// Record kind.
        kind: RecordKind,
        /// Record id.
        id: RecordId,
    },

    // ==================== Validation ====================
    /// Wrong arity or a malformed id, status or amount
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },

    /// No contract function with this name
    #[error("unknown function: {function}")]
    UnknownFunction {
        /// Name as given by the caller.
        function: String,
    },

    // ==================== Access ====================
    /// Write transaction on a read-only ledger
    #[error("access denied: {command} is a write transaction and the ledger is read-only")]
    AccessDenied {
        /// Refused write transaction.
        command: String,
    },

    // ==================== System Errors ====================
    /// The world state rejected a call
    #[error("store failure: {reason}")]
    StoreFailure {
        /// What went wrong.
        reason: String,
    },

    /// Record encoding or decoding failed
    #[error("serialization error: {reason}")]
    Serialization {
        /// What went wrong.
        reason: String,
    },

    /// Snapshot file could not be understood
    #[error("corruption: {reason}")]
    Corruption {
        /// What went wrong.
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {reason}")]
    Io {
        /// What went wrong.
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

impl Error {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}
