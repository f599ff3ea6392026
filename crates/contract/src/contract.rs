//! RecordContract: the contract operations over a world state
//!
//! ## Design
//!
//! RecordContract is a stateless facade over a `WorldState`. It holds no
//! in-memory state beyond an `Arc` store handle, so every call is a pure
//! function of the store contents and its arguments.
//!
//! ## Kind Isolation
//!
//! Every kind owns its own keyspace (see `StateKey`), so a Customer and a
//! Bank with the same id never collide, and `get_all` for one kind never
//! returns another kind's records.
//!
//! ## Canonical Writes
//!
//! Every value written goes through canonical JSON encoding, so identical
//! logical records always produce byte-identical stored values.
//!
//! ## Atomicity
//!
//! `update` and `transfer` are read-check-write sequences with no locking.
//! Conflicting concurrent writers are the host platform's concern.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use insurechain_core::{
    encode_canonical, to_canonical_string, Error, Record, RecordId, RecordKind, Result, StateKey,
    WorldState,
};

use crate::seed::seed_records;

/// Record store contract
///
/// # Example
///
/// ```ignore
/// use insurechain_contract::RecordContract;
/// use insurechain_core::{Customer, RecordKind};
/// use insurechain_storage::MemoryState;
///
/// let contract = RecordContract::new(Arc::new(MemoryState::new()));
/// contract.create(Customer::new(1u64, "Customer", "xxyy"))?;
/// let json = contract.read(RecordKind::Customer, 1u64.into())?;
/// ```
pub struct RecordContract<S: ?Sized = dyn WorldState> {
    state: Arc<S>,
}

impl<S: ?Sized> Clone for RecordContract<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: WorldState + ?Sized> RecordContract<S> {
    /// Create a contract over `state`
    pub fn new(state: Arc<S>) -> Self {
        Self { state }
    }

    /// The underlying world state
    pub fn state(&self) -> &Arc<S> {
        &self.state
    }

    /// Store a new record
    ///
    /// Returns the canonical JSON that was written.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` if the id is taken for this kind.
    pub fn create<R: Record>(&self, record: R) -> Result<String> {
        let id = record.id();
        debug!(kind = %R::KIND, %id, "create");

        if self.exists(R::KIND, id)? {
            return Err(Error::AlreadyExists { kind: R::KIND, id });
        }

        let encoded = record.to_canonical()?;
        self.state
            .put_state(record.state_key().as_str(), encoded.clone().into_bytes())?;
        Ok(encoded)
    }

    /// Return the stored JSON of a record exactly as stored
    ///
    /// # Errors
    ///
    /// `NotFound` if nothing (or an empty value) is stored under the id.
    pub fn read(&self, kind: RecordKind, id: RecordId) -> Result<String> {
        debug!(%kind, %id, "read");
        match self.state.get_state(StateKey::new(kind, id).as_str())? {
            Some(bytes) if !bytes.is_empty() => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            _ => Err(Error::NotFound { kind, id }),
        }
    }

    /// Replace every field of an existing record
    ///
    /// The new value is written as given; an Owner set by an earlier
    /// transfer is not carried over.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is not stored for this kind.
    pub fn update<R: Record>(&self, record: R) -> Result<()> {
        let id = record.id();
        debug!(kind = %R::KIND, %id, "update");

        if !self.exists(R::KIND, id)? {
            return Err(Error::NotFound { kind: R::KIND, id });
        }

        let encoded = record.to_canonical()?;
        self.state
            .put_state(record.state_key().as_str(), encoded.into_bytes())
    }

    /// Remove a record
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is not stored for this kind.
    pub fn delete(&self, kind: RecordKind, id: RecordId) -> Result<()> {
        debug!(%kind, %id, "delete");

        if !self.exists(kind, id)? {
            return Err(Error::NotFound { kind, id });
        }
        self.state.delete_state(StateKey::new(kind, id).as_str())
    }

    /// Check whether a non-empty value is stored under the id
    pub fn exists(&self, kind: RecordKind, id: RecordId) -> Result<bool> {
        Ok(self
            .state
            .get_state(StateKey::new(kind, id).as_str())?
            .map_or(false, |bytes| !bytes.is_empty()))
    }

    /// Set a record's owner
    ///
    /// Returns the previous owner, `None` if the record was never transferred.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is not stored; `Serialization` if the stored
    /// value is not a valid record of this kind.
    pub fn transfer<R: Record>(&self, id: RecordId, new_owner: impl Into<String>) -> Result<Option<String>> {
        let new_owner = new_owner.into();
        debug!(kind = %R::KIND, %id, owner = %new_owner, "transfer");

        let stored = self.read(R::KIND, id)?;
        let mut record = R::decode(stored.as_bytes())?;
        let previous = record.set_owner(new_owner);

        let encoded = record.to_canonical()?;
        self.state
            .put_state(StateKey::new(R::KIND, id).as_str(), encoded.into_bytes())?;
        Ok(previous)
    }

    /// Decode every value in a kind's key range, in key order
    ///
    /// Values that are not JSON come back as JSON strings holding the raw
    /// text.
    pub fn scan(&self, kind: RecordKind) -> Result<Vec<Value>> {
        let (start, end) = kind.key_range();
        let range = self.state.state_by_range(&start, &end)?;

        let entries = range
            .iter()
            .map(|(key, bytes)| {
                let text = String::from_utf8_lossy(bytes);
                serde_json::from_str::<Value>(&text).unwrap_or_else(|e| {
                    warn!(key, error = %e, "Stored value is not JSON, returning raw text");
                    Value::String(text.into_owned())
                })
            })
            .collect::<Vec<_>>();

        debug!(%kind, count = entries.len(), "scan");
        Ok(entries)
    }

    /// All records of a kind as a canonical JSON array
    pub fn get_all(&self, kind: RecordKind) -> Result<String> {
        Ok(encode_canonical(&Value::Array(self.scan(kind)?)))
    }

    /// Write the seed records
    ///
    /// Returns the number of records written.
    ///
    /// # Errors
    ///
    /// `AlreadyExists` on the first seed key that is already stored. Seeds
    /// written before that point stay written.
    pub fn init_ledger(&self) -> Result<usize> {
        let records = seed_records();

        for record in &records {
            let (kind, id) = (record.kind(), record.id());
            if self.exists(kind, id)? {
                return Err(Error::AlreadyExists { kind, id });
            }
            let encoded = to_canonical_string(record)?;
            self.state
                .put_state(record.state_key().as_str(), encoded.into_bytes())?;
        }

        info!(records = records.len(), "Initialized ledger");
        Ok(records.len())
    }
}
