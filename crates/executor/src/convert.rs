//! Error conversion from internal error types.
//!
//! This module provides conversions from core InsureChain errors to
//! the executor's [`Error`] type.

use crate::Error;
use insurechain_core::Error as CoreError;

/// Convert a core error to an executor Error.
///
/// This preserves all error details while mapping to the appropriate
/// executor error variant.
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AlreadyExists { kind, id } => Error::AlreadyExists { kind, id },
            CoreError::NotFound { kind, id } => Error::NotFound { kind, id },
            CoreError::StoreFailure(reason) => Error::StoreFailure { reason },
            CoreError::Serialization(reason) => Error::Serialization { reason },
            CoreError::InvalidArgument(reason) => Error::InvalidArgument { reason },
            CoreError::Corruption(reason) => Error::Corruption { reason },
            CoreError::Io(e) => Error::Io {
                reason: e.to_string(),
            },
        }
    }
}

/// Convert a core `Result` to an executor `Result`.
pub(crate) fn convert_result<T>(r: insurechain_core::Result<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}
