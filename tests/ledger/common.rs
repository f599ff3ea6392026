//! Common test utilities for ledger tests

#![allow(dead_code)]

use std::sync::Arc;

use insurechain::{Executor, Ledger, Output};
use insurechain_core::{RecordId, RecordKind, StateKey, WorldState};
use insurechain_storage::testing::FaultyState;
use insurechain_storage::MemoryState;

/// Create an executor over an empty in-memory world state
pub fn create_executor() -> (Executor, Arc<MemoryState>) {
    let state = Arc::new(MemoryState::new());
    (Executor::new(state.clone()), state)
}

/// Create an executor over a store with fault injection
pub fn create_faulty_executor() -> (Executor, Arc<FaultyState>) {
    let state = Arc::new(FaultyState::new());
    (Executor::new(state.clone()), state)
}

/// Create a seeded ephemeral ledger
pub fn seeded_ledger() -> Ledger {
    let ledger = Ledger::ephemeral();
    ledger.init_ledger().unwrap();
    ledger
}

/// Invoke a function and render its payload
pub fn invoke(executor: &Executor, function: &str, args: &[&str]) -> String {
    executor
        .invoke(function, args)
        .unwrap_or_else(|e| panic!("{} {:?} failed: {}", function, args, e))
        .to_payload()
}

/// Store raw bytes under a record's key, bypassing the contract
pub fn put_raw(state: &dyn WorldState, kind: RecordKind, id: u64, bytes: &[u8]) {
    let key = StateKey::new(kind, RecordId::new(id));
    state.put_state(key.as_str(), bytes.to_vec()).unwrap();
}

/// Raw bytes stored under a record's key
pub fn get_raw(state: &dyn WorldState, kind: RecordKind, id: u64) -> Option<Vec<u8>> {
    let key = StateKey::new(kind, RecordId::new(id));
    state.get_state(key.as_str()).unwrap()
}

/// Extract bool from Output::Bool
pub fn extract_bool(output: &Output) -> bool {
    match output {
        Output::Bool(b) => *b,
        _ => panic!("Expected Output::Bool, got {:?}", output),
    }
}

/// Parse a GetAll payload into its entries
pub fn entries(json: &str) -> Vec<serde_json::Value> {
    match serde_json::from_str(json).unwrap() {
        serde_json::Value::Array(items) => items,
        other => panic!("Expected a JSON array, got {}", other),
    }
}
