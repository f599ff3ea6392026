//! Command enum defining all contract transactions.
//!
//! Commands are the "instruction set" of the ledger. Every contract entry
//! point is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Typed**: Ids, claim status and amounts are parsed before dispatch
//! - **Pure data**: No closures or executable code

use insurechain_core::{ClaimStatus, RecordId, RecordKind};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A command is a self-contained, serializable contract transaction.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Ledger | 1 | `InitLedger` seeding |
/// | Customer | 7 | Policy holders |
/// | Insurance | 7 | Insurance companies |
/// | InsuranceObject | 7 | Claims |
/// | Bank | 7 | Paying banks |
///
/// # Example
///
/// ```ignore
/// use insurechain_executor::Command;
///
/// let cmd = Command::CreateCustomer {
///     id: 13.into(),
///     role: "Customer".into(),
///     name: "xyyx".into(),
/// };
///
/// // Same command from a platform-style invocation
/// let parsed = Command::parse("CreateCustomer", &["13", "Customer", "xyyx"])?;
/// assert_eq!(cmd, parsed);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Ledger (1) ====================
    /// Seed six records of every kind.
    /// Returns: `Output::Unit`
    InitLedger,

    // ==================== Customer (7) ====================
    /// Returns: `Output::Record`
    CreateCustomer {
        /// Record id.
        id: RecordId,
        /// Role label stored with the record.
        role: String,
        /// Display name.
        name: String,
    },
    /// Returns: `Output::Record`
    ReadCustomer {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Unit`
    UpdateCustomer {
        /// Record id.
        id: RecordId,
        /// Role label stored with the record.
        role: String,
        /// Display name.
        name: String,
    },
    /// Returns: `Output::Unit`
    DeleteCustomer {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Bool`
    CustomerExists {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::PreviousOwner`
    TransferCustomer {
        /// Record id.
        id: RecordId,
        /// Owner to record on the target.
        new_owner: String,
    },
    /// Returns: `Output::Records`
    GetAllCustomers,

    // ==================== Insurance (7) ====================
    /// Returns: `Output::Record`
    CreateInsurance {
        /// Record id.
        id: RecordId,
        /// Role label stored with the record.
        role: String,
        /// Display name.
        name: String,
    },
    /// Returns: `Output::Record`
    ReadInsurance {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Unit`
    UpdateInsurance {
        /// Record id.
        id: RecordId,
        /// Role label stored with the record.
        role: String,
        /// Display name.
        name: String,
    },
    /// Returns: `Output::Unit`
    DeleteInsurance {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Bool`
    InsuranceExists {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::PreviousOwner`
    TransferInsurance {
        /// Record id.
        id: RecordId,
        /// Owner to record on the target.
        new_owner: String,
    },
    /// Returns: `Output::Records`
    GetAllInsurance,

    // ==================== InsuranceObject (7) ====================
    /// Returns: `Output::Record`
    CreateInsuranceObject {
        /// Record id.
        id: RecordId,
        /// Insured object type, e.g. `Car`.
        object_type: String,
        /// Claim stage.
        status: ClaimStatus,
        /// Claimed amount.
        amount: u64,
        /// Identity document check.
        adhar: String,
        /// Damage photo evidence.
        damage_images: String,
        /// Invoice verification.
        verified_invoice: String,
    },
    /// Returns: `Output::Record`
    ReadInsuranceObject {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Unit`
    UpdateInsuranceObject {
        /// Record id.
        id: RecordId,
        /// Insured object type, e.g. `Car`.
        object_type: String,
        /// Claim stage.
        status: ClaimStatus,
        /// Claimed amount.
        amount: u64,
        /// Identity document check.
        adhar: String,
        /// Damage photo evidence.
        damage_images: String,
        /// Invoice verification.
        verified_invoice: String,
    },
    /// Returns: `Output::Unit`
    DeleteInsuranceObject {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Bool`
    InsuranceObjectExists {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::PreviousOwner`
    TransferInsuranceObject {
        /// Record id.
        id: RecordId,
        /// Owner to record on the target.
        new_owner: String,
    },
    /// Returns: `Output::Records`
    GetAllInsuranceObject,

    // ==================== Bank (7) ====================
    /// Returns: `Output::Record`
    CreateBank {
        /// Record id.
        id: RecordId,
        /// Role label stored with the record.
        role: String,
        /// Display name.
        name: String,
    },
    /// Returns: `Output::Record`
    ReadBank {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Unit`
    UpdateBank {
        /// Record id.
        id: RecordId,
        /// Role label stored with the record.
        role: String,
        /// Display name.
        name: String,
    },
    /// Returns: `Output::Unit`
    DeleteBank {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::Bool`
    BankExists {
        /// Record id.
        id: RecordId,
    },
    /// Returns: `Output::PreviousOwner`
    TransferBank {
        /// Record id.
        id: RecordId,
        /// Owner to record on the target.
        new_owner: String,
    },
    /// Returns: `Output::Records`
    GetAllBank,
}

/// Every contract function name, in dispatch-table order.
pub const FUNCTION_NAMES: &[&str] = &[
    "InitLedger",
    "CreateCustomer",
    "ReadCustomer",
    "UpdateCustomer",
    "DeleteCustomer",
    "CustomerExists",
    "TransferCustomer",
    "GetAllCustomers",
    "CreateInsurance",
    "ReadInsurance",
    "UpdateInsurance",
    "DeleteInsurance",
    "InsuranceExists",
    "TransferInsurance",
    "GetAllInsurance",
    "CreateInsuranceObject",
    "ReadInsuranceObject",
    "UpdateInsuranceObject",
    "DeleteInsuranceObject",
    "InsuranceObjectExists",
    "TransferInsuranceObject",
    "GetAllInsuranceObject",
    "CreateBank",
    "ReadBank",
    "UpdateBank",
    "DeleteBank",
    "BankExists",
    "TransferBank",
    "GetAllBank",
];

const PARTY_FIELDS: [&str; 3] = ["id", "role", "name"];
const CLAIM_FIELDS: [&str; 7] = [
    "id",
    "type",
    "status",
    "amount",
    "adhar",
    "damage_images",
    "verified_invoice",
];

impl Command {
    /// Build a command from a platform-style invocation.
    ///
    /// `function` is matched case-insensitively against [`FUNCTION_NAMES`];
    /// every argument arrives as a string, the way a chaincode shim passes
    /// them.
    ///
    /// # Errors
    ///
    /// - `UnknownFunction` if no function has this name
    /// - `InvalidArgument` for wrong arity or a non-numeric id, status or amount
    pub fn parse<S: AsRef<str>>(function: &str, args: &[S]) -> Result<Command> {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let name = FUNCTION_NAMES
            .iter()
            .find(|n| n.eq_ignore_ascii_case(function))
            .copied()
            .ok_or_else(|| Error::UnknownFunction {
                function: function.to_string(),
            })?;

        let cmd = match name {
            "InitLedger" => {
                expect_args(name, &args, &[])?;
                Command::InitLedger
            }

            "CreateCustomer" => {
                let (id, role, name) = party_args(name, &args)?;
                Command::CreateCustomer { id, role, name }
            }
            "ReadCustomer" => Command::ReadCustomer {
                id: id_arg(name, &args)?,
            },
            "UpdateCustomer" => {
                let (id, role, name) = party_args(name, &args)?;
                Command::UpdateCustomer { id, role, name }
            }
            "DeleteCustomer" => Command::DeleteCustomer {
                id: id_arg(name, &args)?,
            },
            "CustomerExists" => Command::CustomerExists {
                id: id_arg(name, &args)?,
            },
            "TransferCustomer" => {
                let (id, new_owner) = transfer_args(name, &args)?;
                Command::TransferCustomer { id, new_owner }
            }
            "GetAllCustomers" => {
                expect_args(name, &args, &[])?;
                Command::GetAllCustomers
            }

            "CreateInsurance" => {
                let (id, role, name) = party_args(name, &args)?;
                Command::CreateInsurance { id, role, name }
            }
            "ReadInsurance" => Command::ReadInsurance {
                id: id_arg(name, &args)?,
            },
            "UpdateInsurance" => {
                let (id, role, name) = party_args(name, &args)?;
                Command::UpdateInsurance { id, role, name }
            }
            "DeleteInsurance" => Command::DeleteInsurance {
                id: id_arg(name, &args)?,
            },
            "InsuranceExists" => Command::InsuranceExists {
                id: id_arg(name, &args)?,
            },
            "TransferInsurance" => {
                let (id, new_owner) = transfer_args(name, &args)?;
                Command::TransferInsurance { id, new_owner }
            }
            "GetAllInsurance" => {
                expect_args(name, &args, &[])?;
                Command::GetAllInsurance
            }

            "CreateInsuranceObject" => {
                let c = claim_args(name, &args)?;
                Command::CreateInsuranceObject {
                    id: c.id,
                    object_type: c.object_type,
                    status: c.status,
                    amount: c.amount,
                    adhar: c.adhar,
                    damage_images: c.damage_images,
                    verified_invoice: c.verified_invoice,
                }
            }
            "ReadInsuranceObject" => Command::ReadInsuranceObject {
                id: id_arg(name, &args)?,
            },
            "UpdateInsuranceObject" => {
                let c = claim_args(name, &args)?;
                Command::UpdateInsuranceObject {
                    id: c.id,
                    object_type: c.object_type,
                    status: c.status,
                    amount: c.amount,
                    adhar: c.adhar,
                    damage_images: c.damage_images,
                    verified_invoice: c.verified_invoice,
                }
            }
            "DeleteInsuranceObject" => Command::DeleteInsuranceObject {
                id: id_arg(name, &args)?,
            },
            "InsuranceObjectExists" => Command::InsuranceObjectExists {
                id: id_arg(name, &args)?,
            },
            "TransferInsuranceObject" => {
                let (id, new_owner) = transfer_args(name, &args)?;
                Command::TransferInsuranceObject { id, new_owner }
            }
            "GetAllInsuranceObject" => {
                expect_args(name, &args, &[])?;
                Command::GetAllInsuranceObject
            }

            "CreateBank" => {
                let (id, role, name) = party_args(name, &args)?;
                Command::CreateBank { id, role, name }
            }
            "ReadBank" => Command::ReadBank {
                id: id_arg(name, &args)?,
            },
            "UpdateBank" => {
                let (id, role, name) = party_args(name, &args)?;
                Command::UpdateBank { id, role, name }
            }
            "DeleteBank" => Command::DeleteBank {
                id: id_arg(name, &args)?,
            },
            "BankExists" => Command::BankExists {
                id: id_arg(name, &args)?,
            },
            "TransferBank" => {
                let (id, new_owner) = transfer_args(name, &args)?;
                Command::TransferBank { id, new_owner }
            }
            "GetAllBank" => {
                expect_args(name, &args, &[])?;
                Command::GetAllBank
            }

            other => {
                return Err(Error::Internal {
                    reason: format!("function {} has no parser", other),
                })
            }
        };
        Ok(cmd)
    }

    /// Returns true if this command writes to the world state
    /// (a submit transaction rather than an evaluate).
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::InitLedger
                | Command::CreateCustomer { .. }
                | Command::UpdateCustomer { .. }
                | Command::DeleteCustomer { .. }
                | Command::TransferCustomer { .. }
                | Command::CreateInsurance { .. }
                | Command::UpdateInsurance { .. }
                | Command::DeleteInsurance { .. }
                | Command::TransferInsurance { .. }
                | Command::CreateInsuranceObject { .. }
                | Command::UpdateInsuranceObject { .. }
                | Command::DeleteInsuranceObject { .. }
                | Command::TransferInsuranceObject { .. }
                | Command::CreateBank { .. }
                | Command::UpdateBank { .. }
                | Command::DeleteBank { .. }
                | Command::TransferBank { .. }
        )
    }

    /// Record kind this command operates on, `None` for `InitLedger`.
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Command::InitLedger => None,
            Command::CreateCustomer { .. }
            | Command::ReadCustomer { .. }
            | Command::UpdateCustomer { .. }
            | Command::DeleteCustomer { .. }
            | Command::CustomerExists { .. }
            | Command::TransferCustomer { .. }
            | Command::GetAllCustomers => Some(RecordKind::Customer),
            Command::CreateInsurance { .. }
            | Command::ReadInsurance { .. }
            | Command::UpdateInsurance { .. }
            | Command::DeleteInsurance { .. }
            | Command::InsuranceExists { .. }
            | Command::TransferInsurance { .. }
            | Command::GetAllInsurance => Some(RecordKind::Insurance),
            Command::CreateInsuranceObject { .. }
            | Command::ReadInsuranceObject { .. }
            | Command::UpdateInsuranceObject { .. }
            | Command::DeleteInsuranceObject { .. }
            | Command::InsuranceObjectExists { .. }
            | Command::TransferInsuranceObject { .. }
            | Command::GetAllInsuranceObject => Some(RecordKind::InsuranceObject),
            Command::CreateBank { .. }
            | Command::ReadBank { .. }
            | Command::UpdateBank { .. }
            | Command::DeleteBank { .. }
            | Command::BankExists { .. }
            | Command::TransferBank { .. }
            | Command::GetAllBank => Some(RecordKind::Bank),
        }
    }

    /// Returns the contract function name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::InitLedger => "InitLedger",
            Command::CreateCustomer { .. } => "CreateCustomer",
            Command::ReadCustomer { .. } => "ReadCustomer",
            Command::UpdateCustomer { .. } => "UpdateCustomer",
            Command::DeleteCustomer { .. } => "DeleteCustomer",
            Command::CustomerExists { .. } => "CustomerExists",
            Command::TransferCustomer { .. } => "TransferCustomer",
            Command::GetAllCustomers => "GetAllCustomers",
            Command::CreateInsurance { .. } => "CreateInsurance",
            Command::ReadInsurance { .. } => "ReadInsurance",
            Command::UpdateInsurance { .. } => "UpdateInsurance",
            Command::DeleteInsurance { .. } => "DeleteInsurance",
            Command::InsuranceExists { .. } => "InsuranceExists",
            Command::TransferInsurance { .. } => "TransferInsurance",
            Command::GetAllInsurance => "GetAllInsurance",
            Command::CreateInsuranceObject { .. } => "CreateInsuranceObject",
            Command::ReadInsuranceObject { .. } => "ReadInsuranceObject",
            Command::UpdateInsuranceObject { .. } => "UpdateInsuranceObject",
            Command::DeleteInsuranceObject { .. } => "DeleteInsuranceObject",
            Command::InsuranceObjectExists { .. } => "InsuranceObjectExists",
            Command::TransferInsuranceObject { .. } => "TransferInsuranceObject",
            Command::GetAllInsuranceObject => "GetAllInsuranceObject",
            Command::CreateBank { .. } => "CreateBank",
            Command::ReadBank { .. } => "ReadBank",
            Command::UpdateBank { .. } => "UpdateBank",
            Command::DeleteBank { .. } => "DeleteBank",
            Command::BankExists { .. } => "BankExists",
            Command::TransferBank { .. } => "TransferBank",
            Command::GetAllBank => "GetAllBank",
        }
    }
}

/// Argument names of a contract function, for usage messages.
pub fn function_params(function: &str) -> Option<&'static [&'static str]> {
    let name = FUNCTION_NAMES
        .iter()
        .find(|n| n.eq_ignore_ascii_case(function))?;
    let params: &'static [&'static str] = if *name == "InitLedger" || name.starts_with("GetAll") {
        &[]
    } else if name.starts_with("Transfer") {
        &["id", "new_owner"]
    } else if name.starts_with("Create") || name.starts_with("Update") {
        if name.ends_with("InsuranceObject") {
            &CLAIM_FIELDS
        } else {
            &PARTY_FIELDS
        }
    } else {
        &["id"]
    };
    Some(params)
}

// =============================================================================
// Argument parsing helpers
// =============================================================================

fn expect_args(function: &str, args: &[&str], params: &[&str]) -> Result<()> {
    if args.len() == params.len() {
        return Ok(());
    }
    let expected = if params.is_empty() {
        "no arguments".to_string()
    } else {
        format!("{} argument(s) ({})", params.len(), params.join(", "))
    };
    Err(Error::invalid(format!(
        "{} expects {}, got {}",
        function,
        expected,
        args.len()
    )))
}

fn parse_id(raw: &str) -> Result<RecordId> {
    raw.parse::<RecordId>().map_err(Error::from)
}

fn id_arg(function: &str, args: &[&str]) -> Result<RecordId> {
    expect_args(function, args, &["id"])?;
    parse_id(args[0])
}

fn party_args(function: &str, args: &[&str]) -> Result<(RecordId, String, String)> {
    expect_args(function, args, &PARTY_FIELDS)?;
    Ok((parse_id(args[0])?, args[1].to_string(), args[2].to_string()))
}

fn transfer_args(function: &str, args: &[&str]) -> Result<(RecordId, String)> {
    expect_args(function, args, &["id", "new_owner"])?;
    Ok((parse_id(args[0])?, args[1].to_string()))
}

struct ClaimArgs {
    id: RecordId,
    object_type: String,
    status: ClaimStatus,
    amount: u64,
    adhar: String,
    damage_images: String,
    verified_invoice: String,
}

fn claim_args(function: &str, args: &[&str]) -> Result<ClaimArgs> {
    expect_args(function, args, &CLAIM_FIELDS)?;
    let amount = args[3]
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::invalid(format!("'{}' is not a valid amount", args[3])))?;
    Ok(ClaimArgs {
        id: parse_id(args[0])?,
        object_type: args[1].to_string(),
        status: args[2].parse::<ClaimStatus>().map_err(Error::from)?,
        amount,
        adhar: args[4].to_string(),
        damage_images: args[5].to_string(),
        verified_invoice: args[6].to_string(),
    })
}
