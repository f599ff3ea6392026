//! Core types for record identity
//!
//! This module defines the fundamental types used throughout the system:
//! - [`RecordKind`]: the four record categories
//! - [`RecordId`]: integer identifier, unique within a kind
//! - [`StateKey`]: the world-state key a record lives under
//!
//! Every kind owns a disjoint keyspace: `<prefix>~<id padded to 20 digits>`.
//! Padding makes lexicographic key order equal numeric id order, so a range
//! scan over a kind returns records sorted by id.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Separator between the kind prefix and the padded id
pub const KEY_SEPARATOR: char = '~';

/// Sorts after every character a padded id can contain
const RANGE_END_MARKER: char = '\u{10FFFF}';

/// Width of the zero-padded id (`u64::MAX` has 20 digits)
const ID_WIDTH: usize = 20;

/// The four record categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    /// Policy holder filing claims
    Customer,
    /// Insurance company handling claims
    Insurance,
    /// A claim filed against an insurance policy
    InsuranceObject,
    /// Bank paying out approved claims
    Bank,
}

impl RecordKind {
    /// All kinds, in seeding order
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Customer,
        RecordKind::Insurance,
        RecordKind::InsuranceObject,
        RecordKind::Bank,
    ];

    /// Display name, as used in contract function names and error messages
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Customer => "Customer",
            RecordKind::Insurance => "Insurance",
            RecordKind::InsuranceObject => "InsuranceObject",
            RecordKind::Bank => "Bank",
        }
    }

    /// Keyspace prefix inside the world state
    pub fn key_prefix(&self) -> &'static str {
        match self {
            RecordKind::Customer => "customer",
            RecordKind::Insurance => "insurance",
            RecordKind::InsuranceObject => "insuranceobject",
            RecordKind::Bank => "bank",
        }
    }

    /// Name of the id field in the stored JSON
    pub fn id_field(&self) -> &'static str {
        match self {
            RecordKind::Customer => "CustomerId",
            RecordKind::Insurance | RecordKind::InsuranceObject => "InsuranceId",
            RecordKind::Bank => "BankId",
        }
    }

    /// Half-open key range `[start, end)` covering every key of this kind
    pub fn key_range(&self) -> (String, String) {
        let start = format!("{}{}", self.key_prefix(), KEY_SEPARATOR);
        let end = format!("{}{}", start, RANGE_END_MARKER);
        (start, end)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown record kind '{}'", s)))
    }
}

/// Integer identifier of a record, unique within its kind
///
/// Serializes as a JSON number. Deserializes from a number or from a
/// numeric string, since clients submit every argument as a string and
/// older ledgers stored ids that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// Create a new RecordId
    pub const fn new(id: u64) -> Self {
        RecordId(id)
    }

    /// Raw integer value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|_| Error::InvalidArgument(format!("'{}' is not a valid record id", s)))
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_lenient_u64(deserializer).map(RecordId)
    }
}

/// Accept an unsigned integer given either as a JSON number or a numeric string
pub(crate) fn deserialize_lenient_u64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u64, D::Error> {
    struct LenientU64;

    impl<'de> Visitor<'de> for LenientU64 {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer or a numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("negative value {}", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            v.trim()
                .parse::<u64>()
                .map_err(|_| E::custom(format!("'{}' is not a non-negative integer", v)))
        }
    }

    deserializer.deserialize_any(LenientU64)
}

/// World-state key of a single record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(String);

impl StateKey {
    /// Build the key for `id` inside `kind`'s keyspace
    pub fn new(kind: RecordKind, id: RecordId) -> Self {
        StateKey(format!(
            "{}{}{:0width$}",
            kind.key_prefix(),
            KEY_SEPARATOR,
            id.as_u64(),
            width = ID_WIDTH
        ))
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a raw key back into kind and id
    ///
    /// Returns `None` for keys that were not produced by [`StateKey::new`].
    pub fn parse(raw: &str) -> Option<(RecordKind, RecordId)> {
        let (prefix, id) = raw.split_once(KEY_SEPARATOR)?;
        let kind = RecordKind::ALL
            .into_iter()
            .find(|k| k.key_prefix() == prefix)?;
        if id.len() != ID_WIDTH || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse::<u64>().ok().map(|id| (kind, RecordId(id)))
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
