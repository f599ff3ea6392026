//! Record command handlers.
//!
//! One handler per contract operation, generic over the record type. The
//! executor picks the type from the command variant.

use insurechain_contract::RecordContract;
use insurechain_core::{Record, RecordId, RecordKind};

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle Create<Kind> commands.
pub fn create<R: Record>(c: &RecordContract, record: R) -> Result<Output> {
    let json = convert_result(c.create(record))?;
    Ok(Output::Record(json))
}

/// Handle Read<Kind> commands.
pub fn read(c: &RecordContract, kind: RecordKind, id: RecordId) -> Result<Output> {
    let json = convert_result(c.read(kind, id))?;
    Ok(Output::Record(json))
}

/// Handle Update<Kind> commands.
pub fn update<R: Record>(c: &RecordContract, record: R) -> Result<Output> {
    convert_result(c.update(record))?;
    Ok(Output::Unit)
}

/// Handle Delete<Kind> commands.
pub fn delete(c: &RecordContract, kind: RecordKind, id: RecordId) -> Result<Output> {
    convert_result(c.delete(kind, id))?;
    Ok(Output::Unit)
}

/// Handle <Kind>Exists commands.
pub fn exists(c: &RecordContract, kind: RecordKind, id: RecordId) -> Result<Output> {
    let exists = convert_result(c.exists(kind, id))?;
    Ok(Output::Bool(exists))
}

/// Handle Transfer<Kind> commands.
pub fn transfer<R: Record>(c: &RecordContract, id: RecordId, new_owner: String) -> Result<Output> {
    let previous = convert_result(c.transfer::<R>(id, new_owner))?;
    Ok(Output::PreviousOwner(previous))
}

/// Handle GetAll<Kind> commands.
pub fn get_all(c: &RecordContract, kind: RecordKind) -> Result<Output> {
    let json = convert_result(c.get_all(kind))?;
    Ok(Output::Records(json))
}
