//! High-level typed wrapper for the Executor.
//!
//! The [`Ledger`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls,
//! and owns the world state the executor runs against.
//!
//! # Example
//!
//! ```ignore
//! use insurechain_executor::Ledger;
//!
//! let ledger = Ledger::ephemeral();
//! ledger.init_ledger()?;
//!
//! ledger.create_customer(13u64, "Customer", "xyyx")?;
//! let previous = ledger.transfer_customer(13u64, "Tom")?;
//! assert_eq!(previous, None);
//! ```

use std::path::Path;
use std::sync::Arc;

use insurechain_core::{ClaimStatus, InsuranceObject, Record, RecordId, WorldState};
use insurechain_security::{AccessMode, OpenOptions};
use insurechain_storage::MemoryState;
use tracing::info;

use crate::convert::convert_result;
use crate::{Command, Error, Executor, Output, Result};

/// High-level typed wrapper for ledger transactions.
///
/// Each method:
///
/// 1. Creates the appropriate [`Command`]
/// 2. Executes it via the [`Executor`]
/// 3. Extracts and returns the typed result
pub struct Ledger {
    executor: Executor,
    state: Arc<MemoryState>,
}

impl Ledger {
    /// Create a read-write ledger with an in-memory world state that is
    /// never written to disk.
    pub fn ephemeral() -> Self {
        Self::with_state(Arc::new(MemoryState::new()), AccessMode::ReadWrite)
    }

    /// Open a ledger backed by a snapshot file.
    ///
    /// A missing file yields an empty ledger; the file is created by the
    /// first [`flush`](Self::flush).
    pub fn open(path: impl AsRef<Path>, opts: OpenOptions) -> Result<Self> {
        let state = Arc::new(convert_result(MemoryState::open(path))?);
        let ledger = Self::with_state(state, opts.access_mode);
        ledger.seed_if_empty(&opts)?;
        Ok(ledger)
    }

    /// Create an in-memory ledger honouring `opts`.
    pub fn ephemeral_with(opts: OpenOptions) -> Result<Self> {
        let ledger = Self::with_state(Arc::new(MemoryState::new()), opts.access_mode);
        ledger.seed_if_empty(&opts)?;
        Ok(ledger)
    }

    fn seed_if_empty(&self, opts: &OpenOptions) -> Result<()> {
        if opts.seeds_empty_ledger() && self.state.is_empty() && opts.access_mode.allows_writes() {
            self.init_ledger()?;
            self.flush()?;
        }
        Ok(())
    }

    /// Wrap an existing world state.
    pub fn with_state(state: Arc<MemoryState>, access_mode: AccessMode) -> Self {
        let world: Arc<dyn WorldState> = Arc::clone(&state) as Arc<dyn WorldState>;
        Self {
            executor: Executor::new_with_mode(world, access_mode),
            state,
        }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Get the underlying world state.
    pub fn state(&self) -> &Arc<MemoryState> {
        &self.state
    }

    /// Persist the world state to its snapshot file.
    ///
    /// No-op for ephemeral and read-only ledgers.
    pub fn flush(&self) -> Result<()> {
        if !self.executor.access_mode().allows_writes() {
            return Ok(());
        }
        convert_result(self.state.flush())
    }

    /// Parse and execute a platform-style invocation.
    pub fn invoke<S: AsRef<str>>(&self, function: &str, args: &[S]) -> Result<Output> {
        self.executor.invoke(function, args)
    }

    // =========================================================================
    // Ledger Operations (1)
    // =========================================================================

    /// Seed six records of every kind.
    pub fn init_ledger(&self) -> Result<()> {
        expect_unit(self.executor.execute(Command::InitLedger)?, "InitLedger")?;
        info!(keys = self.state.len(), "Ledger seeded");
        Ok(())
    }

    // =========================================================================
    // Customer Operations (7)
    // =========================================================================

    /// Create a customer, returning its stored JSON.
    pub fn create_customer(&self, id: impl Into<RecordId>, role: &str, name: &str) -> Result<String> {
        let out = self.executor.execute(Command::CreateCustomer {
            id: id.into(),
            role: role.to_string(),
            name: name.to_string(),
        })?;
        expect_record(out, "CreateCustomer")
    }

    /// Read a customer's stored JSON.
    pub fn read_customer(&self, id: impl Into<RecordId>) -> Result<String> {
        let out = self.executor.execute(Command::ReadCustomer { id: id.into() })?;
        expect_record(out, "ReadCustomer")
    }

    /// Replace a customer's fields.
    pub fn update_customer(&self, id: impl Into<RecordId>, role: &str, name: &str) -> Result<()> {
        let out = self.executor.execute(Command::UpdateCustomer {
            id: id.into(),
            role: role.to_string(),
            name: name.to_string(),
        })?;
        expect_unit(out, "UpdateCustomer")
    }

    /// Delete a customer.
    pub fn delete_customer(&self, id: impl Into<RecordId>) -> Result<()> {
        let out = self.executor.execute(Command::DeleteCustomer { id: id.into() })?;
        expect_unit(out, "DeleteCustomer")
    }

    /// Check whether a customer exists.
    pub fn customer_exists(&self, id: impl Into<RecordId>) -> Result<bool> {
        let out = self.executor.execute(Command::CustomerExists { id: id.into() })?;
        expect_bool(out, "CustomerExists")
    }

    /// Transfer a customer, returning the previous owner.
    pub fn transfer_customer(&self, id: impl Into<RecordId>, new_owner: &str) -> Result<Option<String>> {
        let out = self.executor.execute(Command::TransferCustomer {
            id: id.into(),
            new_owner: new_owner.to_string(),
        })?;
        expect_previous_owner(out, "TransferCustomer")
    }

    /// All customers as a JSON array.
    pub fn get_all_customers(&self) -> Result<String> {
        let out = self.executor.execute(Command::GetAllCustomers)?;
        expect_records(out, "GetAllCustomers")
    }

    // =========================================================================
    // Insurance Operations (7)
    // =========================================================================

    /// Create an insurance company, returning its stored JSON.
    pub fn create_insurance(&self, id: impl Into<RecordId>, role: &str, name: &str) -> Result<String> {
        let out = self.executor.execute(Command::CreateInsurance {
            id: id.into(),
            role: role.to_string(),
            name: name.to_string(),
        })?;
        expect_record(out, "CreateInsurance")
    }

    /// Read an insurance company's stored JSON.
    pub fn read_insurance(&self, id: impl Into<RecordId>) -> Result<String> {
        let out = self.executor.execute(Command::ReadInsurance { id: id.into() })?;
        expect_record(out, "ReadInsurance")
    }

    /// Replace an insurance company's fields.
    pub fn update_insurance(&self, id: impl Into<RecordId>, role: &str, name: &str) -> Result<()> {
        let out = self.executor.execute(Command::UpdateInsurance {
            id: id.into(),
            role: role.to_string(),
            name: name.to_string(),
        })?;
        expect_unit(out, "UpdateInsurance")
    }

    /// Delete an insurance company.
    pub fn delete_insurance(&self, id: impl Into<RecordId>) -> Result<()> {
        let out = self.executor.execute(Command::DeleteInsurance { id: id.into() })?;
        expect_unit(out, "DeleteInsurance")
    }

    /// Check whether an insurance company exists.
    pub fn insurance_exists(&self, id: impl Into<RecordId>) -> Result<bool> {
        let out = self.executor.execute(Command::InsuranceExists { id: id.into() })?;
        expect_bool(out, "InsuranceExists")
    }

    /// Transfer an insurance company, returning the previous owner.
    pub fn transfer_insurance(&self, id: impl Into<RecordId>, new_owner: &str) -> Result<Option<String>> {
        let out = self.executor.execute(Command::TransferInsurance {
            id: id.into(),
            new_owner: new_owner.to_string(),
        })?;
        expect_previous_owner(out, "TransferInsurance")
    }

    /// All insurance companies as a JSON array.
    pub fn get_all_insurance(&self) -> Result<String> {
        let out = self.executor.execute(Command::GetAllInsurance)?;
        expect_records(out, "GetAllInsurance")
    }

    // =========================================================================
    // InsuranceObject Operations (7)
    // =========================================================================

    /// File a claim, returning its stored JSON.
    ///
    /// Owner and docType on `claim` are ignored.
    pub fn create_insurance_object(&self, claim: InsuranceObject) -> Result<String> {
        let out = self.executor.execute(claim_command(claim, false))?;
        expect_record(out, "CreateInsuranceObject")
    }

    /// Read a claim's stored JSON.
    pub fn read_insurance_object(&self, id: impl Into<RecordId>) -> Result<String> {
        let out = self
            .executor
            .execute(Command::ReadInsuranceObject { id: id.into() })?;
        expect_record(out, "ReadInsuranceObject")
    }

    /// Replace a claim's fields.
    ///
    /// Owner and docType on `claim` are ignored.
    pub fn update_insurance_object(&self, claim: InsuranceObject) -> Result<()> {
        let out = self.executor.execute(claim_command(claim, true))?;
        expect_unit(out, "UpdateInsuranceObject")
    }

    /// Move a claim to another stage, keeping its other fields.
    ///
    /// Unlike [`Ledger::update_insurance_object`], Owner and docType survive.
    pub fn set_claim_status(&self, id: impl Into<RecordId>, status: ClaimStatus) -> Result<()> {
        if !self.executor.access_mode().allows_writes() {
            return Err(Error::AccessDenied {
                command: "UpdateInsuranceObject".to_string(),
            });
        }
        let id = id.into();
        let stored = self.read_insurance_object(id)?;
        let mut claim = convert_result(InsuranceObject::decode(stored.as_bytes()))?;
        claim.status = status;
        convert_result(self.executor.contract().update(claim))
    }

    /// Delete a claim.
    pub fn delete_insurance_object(&self, id: impl Into<RecordId>) -> Result<()> {
        let out = self
            .executor
            .execute(Command::DeleteInsuranceObject { id: id.into() })?;
        expect_unit(out, "DeleteInsuranceObject")
    }

    /// Check whether a claim exists.
    pub fn insurance_object_exists(&self, id: impl Into<RecordId>) -> Result<bool> {
        let out = self
            .executor
            .execute(Command::InsuranceObjectExists { id: id.into() })?;
        expect_bool(out, "InsuranceObjectExists")
    }

    /// Transfer a claim, returning the previous owner.
    pub fn transfer_insurance_object(
        &self,
        id: impl Into<RecordId>,
        new_owner: &str,
    ) -> Result<Option<String>> {
        let out = self.executor.execute(Command::TransferInsuranceObject {
            id: id.into(),
            new_owner: new_owner.to_string(),
        })?;
        expect_previous_owner(out, "TransferInsuranceObject")
    }

    /// All claims as a JSON array.
    pub fn get_all_insurance_object(&self) -> Result<String> {
        let out = self.executor.execute(Command::GetAllInsuranceObject)?;
        expect_records(out, "GetAllInsuranceObject")
    }

    // =========================================================================
    // Bank Operations (7)
    // =========================================================================

    /// Create a bank, returning its stored JSON.
    pub fn create_bank(&self, id: impl Into<RecordId>, role: &str, name: &str) -> Result<String> {
        let out = self.executor.execute(Command::CreateBank {
            id: id.into(),
            role: role.to_string(),
            name: name.to_string(),
        })?;
        expect_record(out, "CreateBank")
    }

    /// Read a bank's stored JSON.
    pub fn read_bank(&self, id: impl Into<RecordId>) -> Result<String> {
        let out = self.executor.execute(Command::ReadBank { id: id.into() })?;
        expect_record(out, "ReadBank")
    }

    /// Replace a bank's fields.
    pub fn update_bank(&self, id: impl Into<RecordId>, role: &str, name: &str) -> Result<()> {
        let out = self.executor.execute(Command::UpdateBank {
            id: id.into(),
            role: role.to_string(),
            name: name.to_string(),
        })?;
        expect_unit(out, "UpdateBank")
    }

    /// Delete a bank.
    pub fn delete_bank(&self, id: impl Into<RecordId>) -> Result<()> {
        let out = self.executor.execute(Command::DeleteBank { id: id.into() })?;
        expect_unit(out, "DeleteBank")
    }

    /// Check whether a bank exists.
    pub fn bank_exists(&self, id: impl Into<RecordId>) -> Result<bool> {
        let out = self.executor.execute(Command::BankExists { id: id.into() })?;
        expect_bool(out, "BankExists")
    }

    /// Transfer a bank, returning the previous owner.
    pub fn transfer_bank(&self, id: impl Into<RecordId>, new_owner: &str) -> Result<Option<String>> {
        let out = self.executor.execute(Command::TransferBank {
            id: id.into(),
            new_owner: new_owner.to_string(),
        })?;
        expect_previous_owner(out, "TransferBank")
    }

    /// All banks as a JSON array.
    pub fn get_all_bank(&self) -> Result<String> {
        let out = self.executor.execute(Command::GetAllBank)?;
        expect_records(out, "GetAllBank")
    }
}

fn claim_command(claim: InsuranceObject, update: bool) -> Command {
    let InsuranceObject {
        id,
        object_type,
        status,
        amount,
        adhar,
        damage_images,
        verified_invoice,
        ..
    } = claim;

    if update {
        Command::UpdateInsuranceObject {
            id,
            object_type,
            status,
            amount,
            adhar,
            damage_images,
            verified_invoice,
        }
    } else {
        Command::CreateInsuranceObject {
            id,
            object_type,
            status,
            amount,
            adhar,
            damage_images,
            verified_invoice,
        }
    }
}

// =============================================================================
// Output extraction
// =============================================================================

fn unexpected(command: &str, out: &Output) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}: {:?}", command, out),
    }
}

fn expect_unit(out: Output, command: &str) -> Result<()> {
    match out {
        Output::Unit => Ok(()),
        other => Err(unexpected(command, &other)),
    }
}

fn expect_bool(out: Output, command: &str) -> Result<bool> {
    match out {
        Output::Bool(b) => Ok(b),
        other => Err(unexpected(command, &other)),
    }
}

fn expect_record(out: Output, command: &str) -> Result<String> {
    match out {
        Output::Record(json) => Ok(json),
        other => Err(unexpected(command, &other)),
    }
}

fn expect_records(out: Output, command: &str) -> Result<String> {
    match out {
        Output::Records(json) => Ok(json),
        other => Err(unexpected(command, &other)),
    }
}

fn expect_previous_owner(out: Output, command: &str) -> Result<Option<String>> {
    match out {
        Output::PreviousOwner(owner) => Ok(owner),
        other => Err(unexpected(command, &other)),
    }
}
