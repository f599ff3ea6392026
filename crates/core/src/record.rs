//! Typed records, one struct per kind
//!
//! Field names follow the stored JSON (PascalCase, plus the lowercase
//! `docType` tag written by ledger seeding). Optional fields are omitted
//! from the JSON when unset, never written as `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::canonical::to_canonical_string;
use crate::error::{Error, Result};
use crate::types::{deserialize_lenient_u64, RecordId, RecordKind, StateKey};

/// Behaviour shared by every record kind
///
/// The contract layer is written once against this trait; the four kinds
/// only differ in their field sets.
pub trait Record:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Kind this record type belongs to
    const KIND: RecordKind;

    /// Id of this record within its kind
    fn id(&self) -> RecordId;

    /// Current owner, if the record was ever transferred
    fn owner(&self) -> Option<&str>;

    /// Set the owner, returning the previous one
    fn set_owner(&mut self, owner: String) -> Option<String>;

    /// Document type tag, present on seeded records
    fn doc_type(&self) -> Option<&str>;

    /// Tag the record with its kind name
    fn tag_doc_type(&mut self);

    /// World-state key of this record
    fn state_key(&self) -> StateKey {
        StateKey::new(Self::KIND, self.id())
    }

    /// Canonical JSON encoding of this record
    fn to_canonical(&self) -> Result<String> {
        to_canonical_string(self)
    }

    /// Decode a stored value
    fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::from)
    }
}

// Customer, Insurance and Bank share one shape and differ only in the
// name of their id field.
macro_rules! party_record {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $id_field:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// Record id
            #[serde(rename = $id_field)]
            pub id: RecordId,
            /// Participant role
            #[serde(rename = "Role")]
            pub role: String,
            /// Display name
            #[serde(rename = "Name")]
            pub name: String,
            /// Owner, set by a transfer
            #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
            pub owner: Option<String>,
            /// Kind tag written by ledger seeding
            #[serde(rename = "docType", default, skip_serializing_if = "Option::is_none")]
            pub doc_type: Option<String>,
        }

        impl $name {
            /// Create an untransferred, untagged record
            pub fn new(id: impl Into<RecordId>, role: impl Into<String>, name: impl Into<String>) -> Self {
                Self {
                    id: id.into(),
                    role: role.into(),
                    name: name.into(),
                    owner: None,
                    doc_type: None,
                }
            }
        }

        impl Record for $name {
            const KIND: RecordKind = $kind;

            fn id(&self) -> RecordId {
                self.id
            }

            fn owner(&self) -> Option<&str> {
                self.owner.as_deref()
            }

            fn set_owner(&mut self, owner: String) -> Option<String> {
                self.owner.replace(owner)
            }

            fn doc_type(&self) -> Option<&str> {
                self.doc_type.as_deref()
            }

            fn tag_doc_type(&mut self) {
                self.doc_type = Some(Self::KIND.name().to_string());
            }
        }
    };
}

party_record!(
    /// Policy holder
    Customer,
    RecordKind::Customer,
    "CustomerId"
);

party_record!(
    /// Insurance company
    Insurance,
    RecordKind::Insurance,
    "InsuranceId"
);

party_record!(
    /// Bank paying out approved claims
    Bank,
    RecordKind::Bank,
    "BankId"
);

/// Stage of a claim
///
/// Stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    /// Customer submitted the settlement request
    Filed = 0,
    /// Insurer inspected and photographed the damage
    Inspected = 1,
    /// Approved, the bank pays out
    Approved = 2,
    /// Settlement rejected by the insurer
    Rejected = 3,
}

impl ClaimStatus {
    /// Integer code as stored
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Filed => "filed",
            ClaimStatus::Inspected => "inspected",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

impl TryFrom<u64> for ClaimStatus {
    type Error = Error;

    fn try_from(code: u64) -> Result<Self> {
        match code {
            0 => Ok(ClaimStatus::Filed),
            1 => Ok(ClaimStatus::Inspected),
            2 => Ok(ClaimStatus::Approved),
            3 => Ok(ClaimStatus::Rejected),
            other => Err(Error::InvalidArgument(format!(
                "unknown claim status {} (expected 0-3)",
                other
            ))),
        }
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidArgument(format!("'{}' is not a valid claim status", s)))?;
        ClaimStatus::try_from(code)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClaimStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = deserialize_lenient_u64(deserializer)?;
        ClaimStatus::try_from(code).map_err(serde::de::Error::custom)
    }
}

/// A claim filed against an insurance policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceObject {
    /// Claim id
    #[serde(rename = "InsuranceId")]
    pub id: RecordId,
    /// Insured object type, e.g. "Car"
    #[serde(rename = "Type")]
    pub object_type: String,
    /// Claim stage
    #[serde(rename = "Status")]
    pub status: ClaimStatus,
    /// Claimed amount
    #[serde(rename = "Amount", deserialize_with = "deserialize_lenient_u64")]
    pub amount: u64,
    /// Identity document provided
    #[serde(rename = "Adhar")]
    pub adhar: String,
    /// Damage images provided
    #[serde(rename = "DamageImages")]
    pub damage_images: String,
    /// Invoice verified
    #[serde(rename = "VerifiedInvoice")]
    pub verified_invoice: String,
    /// Owner, set by a transfer
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Kind tag written by ledger seeding
    #[serde(rename = "docType", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
}

impl InsuranceObject {
    /// Create an untransferred, untagged claim
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<RecordId>,
        object_type: impl Into<String>,
        status: ClaimStatus,
        amount: u64,
        adhar: impl Into<String>,
        damage_images: impl Into<String>,
        verified_invoice: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            object_type: object_type.into(),
            status,
            amount,
            adhar: adhar.into(),
            damage_images: damage_images.into(),
            verified_invoice: verified_invoice.into(),
            owner: None,
            doc_type: None,
        }
    }
}

impl Record for InsuranceObject {
    const KIND: RecordKind = RecordKind::InsuranceObject;

    fn id(&self) -> RecordId {
        self.id
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn set_owner(&mut self, owner: String) -> Option<String> {
        self.owner.replace(owner)
    }

    fn doc_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    fn tag_doc_type(&mut self) {
        self.doc_type = Some(Self::KIND.name().to_string());
    }
}

/// A record of any kind
///
/// Serializes exactly like the wrapped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyRecord {
    /// Customer record
    Customer(Customer),
    /// Insurance record
    Insurance(Insurance),
    /// Claim record
    InsuranceObject(InsuranceObject),
    /// Bank record
    Bank(Bank),
}

impl AnyRecord {
    /// Kind of the wrapped record
    pub fn kind(&self) -> RecordKind {
        match self {
            AnyRecord::Customer(_) => RecordKind::Customer,
            AnyRecord::Insurance(_) => RecordKind::Insurance,
            AnyRecord::InsuranceObject(_) => RecordKind::InsuranceObject,
            AnyRecord::Bank(_) => RecordKind::Bank,
        }
    }

    /// Id of the wrapped record
    pub fn id(&self) -> RecordId {
        match self {
            AnyRecord::Customer(r) => r.id(),
            AnyRecord::Insurance(r) => r.id(),
            AnyRecord::InsuranceObject(r) => r.id(),
            AnyRecord::Bank(r) => r.id(),
        }
    }

    /// World-state key of the wrapped record
    pub fn state_key(&self) -> StateKey {
        StateKey::new(self.kind(), self.id())
    }

    /// Decode a stored value as a record of `kind`
    pub fn decode(kind: RecordKind, bytes: &[u8]) -> Result<Self> {
        Ok(match kind {
            RecordKind::Customer => AnyRecord::Customer(Customer::decode(bytes)?),
            RecordKind::Insurance => AnyRecord::Insurance(Insurance::decode(bytes)?),
            RecordKind::InsuranceObject => {
                AnyRecord::InsuranceObject(InsuranceObject::decode(bytes)?)
            }
            RecordKind::Bank => AnyRecord::Bank(Bank::decode(bytes)?),
        })
    }
}

impl From<Customer> for AnyRecord {
    fn from(r: Customer) -> Self {
        AnyRecord::Customer(r)
    }
}

impl From<Insurance> for AnyRecord {
    fn from(r: Insurance) -> Self {
        AnyRecord::Insurance(r)
    }
}

impl From<InsuranceObject> for AnyRecord {
    fn from(r: InsuranceObject) -> Self {
        AnyRecord::InsuranceObject(r)
    }
}

impl From<Bank> for AnyRecord {
    fn from(r: Bank) -> Self {
        AnyRecord::Bank(r)
    }
}
