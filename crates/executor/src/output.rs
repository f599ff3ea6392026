//! Output enum for transaction results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on ledger state).

use serde::{Deserialize, Serialize};

/// Successful transaction results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use insurechain_executor::{Command, Output, Executor};
///
/// let result = executor.execute(Command::CustomerExists { id: 1.into() })?;
///
/// match result {
///     Output::Bool(true) => println!("Found"),
///     Output::Bool(false) => println!("Not found"),
///     _ => unreachable!("CustomerExists always returns Bool"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (update, delete, init)
    Unit,

    /// Boolean result (exists)
    Bool(bool),

    /// One record as JSON text (create, read)
    Record(String),

    /// JSON array of a kind's records (get-all)
    Records(String),

    /// Owner before a transfer, `None` if never transferred
    PreviousOwner(Option<String>),
}

impl Output {
    /// Render the payload the contract returns to a client.
    ///
    /// | Output | Payload |
    /// |--------|---------|
    /// | `Unit` | empty |
    /// | `Bool` | `true` / `false` |
    /// | `Record` / `Records` | the JSON text |
    /// | `PreviousOwner` | the owner, or empty |
    pub fn to_payload(&self) -> String {
        match self {
            Output::Unit => String::new(),
            Output::Bool(b) => b.to_string(),
            Output::Record(json) | Output::Records(json) => json.clone(),
            Output::PreviousOwner(owner) => owner.clone().unwrap_or_default(),
        }
    }
}
