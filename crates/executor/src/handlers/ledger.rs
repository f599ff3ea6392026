//! Ledger-wide command handlers.

use insurechain_contract::RecordContract;
use tracing::info;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle InitLedger command.
pub fn init_ledger(c: &RecordContract) -> Result<Output> {
    let seeded = convert_result(c.init_ledger())?;
    info!(records = seeded, "InitLedger committed");
    Ok(Output::Unit)
}
