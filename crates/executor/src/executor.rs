//! The Executor - single entry point to the record contract.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate contract operations and converts results to outputs.

use std::sync::Arc;

use insurechain_contract::RecordContract;
use insurechain_core::{Bank, Customer, Insurance, InsuranceObject, RecordKind, WorldState};
use insurechain_security::AccessMode;
use tracing::debug;

use crate::handlers::{ledger, record};
use crate::{Command, Error, Output, Result};

/// The command executor - single entry point to the record contract.
///
/// The Executor is **stateless**: it holds a handle to the world state but
/// maintains no state of its own. All state lives in the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use insurechain_executor::{Command, Executor};
///
/// let executor = Executor::new(state);
///
/// // Single command execution
/// let result = executor.execute(Command::InitLedger)?;
///
/// // Platform-style invocation
/// let json = executor.invoke("ReadCustomer", &["1"])?.to_payload();
///
/// // Batch execution
/// let results = executor.execute_many(vec![
///     Command::CustomerExists { id: 1.into() },
///     Command::CustomerExists { id: 2.into() },
/// ]);
/// ```
#[derive(Clone)]
pub struct Executor {
    contract: RecordContract,
    access_mode: AccessMode,
}

impl Executor {
    /// Create a new read-write executor over a world state.
    pub fn new(state: Arc<dyn WorldState>) -> Self {
        Self::new_with_mode(state, AccessMode::ReadWrite)
    }

    /// Create a new executor with an explicit access mode.
    pub fn new_with_mode(state: Arc<dyn WorldState>, access_mode: AccessMode) -> Self {
        Self {
            contract: RecordContract::new(state),
            access_mode,
        }
    }

    /// Access mode this executor enforces.
    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    /// Get a reference to the underlying contract.
    ///
    /// This is an escape hatch for advanced use cases.
    pub fn contract(&self) -> &RecordContract {
        &self.contract
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        if cmd.is_write() && !self.access_mode.allows_writes() {
            return Err(Error::AccessDenied {
                command: cmd.name().to_string(),
            });
        }

        debug!(command = cmd.name(), "execute");
        let c = &self.contract;

        match cmd {
            Command::InitLedger => ledger::init_ledger(c),

            // Customer commands
            Command::CreateCustomer { id, role, name } => {
                record::create(c, Customer::new(id, role, name))
            }
            Command::ReadCustomer { id } => record::read(c, RecordKind::Customer, id),
            Command::UpdateCustomer { id, role, name } => {
                record::update(c, Customer::new(id, role, name))
            }
            Command::DeleteCustomer { id } => record::delete(c, RecordKind::Customer, id),
            Command::CustomerExists { id } => record::exists(c, RecordKind::Customer, id),
            Command::TransferCustomer { id, new_owner } => {
                record::transfer::<Customer>(c, id, new_owner)
            }
            Command::GetAllCustomers => record::get_all(c, RecordKind::Customer),

            // Insurance commands
            Command::CreateInsurance { id, role, name } => {
                record::create(c, Insurance::new(id, role, name))
            }
            Command::ReadInsurance { id } => record::read(c, RecordKind::Insurance, id),
            Command::UpdateInsurance { id, role, name } => {
                record::update(c, Insurance::new(id, role, name))
            }
            Command::DeleteInsurance { id } => record::delete(c, RecordKind::Insurance, id),
            Command::InsuranceExists { id } => record::exists(c, RecordKind::Insurance, id),
            Command::TransferInsurance { id, new_owner } => {
                record::transfer::<Insurance>(c, id, new_owner)
            }
            Command::GetAllInsurance => record::get_all(c, RecordKind::Insurance),

            // InsuranceObject commands
            Command::CreateInsuranceObject {
                id,
                object_type,
                status,
                amount,
                adhar,
                damage_images,
                verified_invoice,
            } => record::create(
                c,
                InsuranceObject::new(
                    id,
                    object_type,
                    status,
                    amount,
                    adhar,
                    damage_images,
                    verified_invoice,
                ),
            ),
            Command::ReadInsuranceObject { id } => {
                record::read(c, RecordKind::InsuranceObject, id)
            }
            Command::UpdateInsuranceObject {
                id,
                object_type,
                status,
                amount,
                adhar,
                damage_images,
                verified_invoice,
            } => record::update(
                c,
                InsuranceObject::new(
                    id,
                    object_type,
                    status,
                    amount,
                    adhar,
                    damage_images,
                    verified_invoice,
                ),
            ),
            Command::DeleteInsuranceObject { id } => {
                record::delete(c, RecordKind::InsuranceObject, id)
            }
            Command::InsuranceObjectExists { id } => {
                record::exists(c, RecordKind::InsuranceObject, id)
            }
            Command::TransferInsuranceObject { id, new_owner } => {
                record::transfer::<InsuranceObject>(c, id, new_owner)
            }
            Command::GetAllInsuranceObject => record::get_all(c, RecordKind::InsuranceObject),

            // Bank commands
            Command::CreateBank { id, role, name } => record::create(c, Bank::new(id, role, name)),
            Command::ReadBank { id } => record::read(c, RecordKind::Bank, id),
            Command::UpdateBank { id, role, name } => record::update(c, Bank::new(id, role, name)),
            Command::DeleteBank { id } => record::delete(c, RecordKind::Bank, id),
            Command::BankExists { id } => record::exists(c, RecordKind::Bank, id),
            Command::TransferBank { id, new_owner } => record::transfer::<Bank>(c, id, new_owner),
            Command::GetAllBank => record::get_all(c, RecordKind::Bank),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Parse and execute a platform-style invocation.
    ///
    /// `function` is a contract function name such as `CreateCustomer`;
    /// `args` are its arguments as strings.
    pub fn invoke<S: AsRef<str>>(&self, function: &str, args: &[S]) -> Result<Output> {
        let cmd = Command::parse(function, args)?;
        self.execute(cmd)
    }
}
