//! Tests for the execute_many batch execution method.
//!
//! These tests verify that batch command execution works correctly,
//! including error handling and result ordering.

use std::sync::Arc;

use insurechain_storage::MemoryState;

use crate::{Command, Error, Executor, Output, RecordId, RecordKind};

/// Create a test executor over an empty in-memory world state.
fn create_test_executor() -> Executor {
    Executor::new(Arc::new(MemoryState::new()))
}

fn create_bank(id: u64) -> Command {
    Command::CreateBank {
        id: id.into(),
        role: "Bank".into(),
        name: format!("bank-{}", id),
    }
}

#[test]
fn test_execute_many_empty() {
    let executor = create_test_executor();
    let results = executor.execute_many(vec![]);
    assert!(results.is_empty());
}

#[test]
fn test_execute_many_single_command() {
    let executor = create_test_executor();
    let results = executor.execute_many(vec![Command::GetAllBank]);

    assert_eq!(results.len(), 1);
    match &results[0] {
        Ok(Output::Records(json)) => assert_eq!(json, "[]"),
        other => panic!("Expected Records output, got {:?}", other),
    }
}

#[test]
fn test_execute_many_preserves_order() {
    let executor = create_test_executor();
    let results = executor.execute_many(vec![
        create_bank(3),
        create_bank(1),
        create_bank(2),
        Command::GetAllBank,
    ]);

    assert_eq!(results.len(), 4);
    for result in &results[..3] {
        assert!(matches!(result, Ok(Output::Record(_))));
    }
    match &results[3] {
        Ok(Output::Records(json)) => {
            let ids: Vec<u64> = serde_json::from_str::<Vec<serde_json::Value>>(json)
                .unwrap()
                .iter()
                .map(|v| v["BankId"].as_u64().unwrap())
                .collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
        other => panic!("Expected Records output, got {:?}", other),
    }
}

#[test]
fn test_execute_many_continues_after_error() {
    let executor = create_test_executor();
    let results = executor.execute_many(vec![
        create_bank(1),
        create_bank(1),
        Command::BankExists { id: 1u64.into() },
        Command::ReadBank { id: 9u64.into() },
        Command::BankExists { id: 9u64.into() },
    ]);

    assert_eq!(results.len(), 5);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(Error::AlreadyExists {
            kind: RecordKind::Bank,
            id: RecordId::new(1)
        })
    );
    assert_eq!(results[2], Ok(Output::Bool(true)));
    assert_eq!(
        results[3],
        Err(Error::NotFound {
            kind: RecordKind::Bank,
            id: RecordId::new(9)
        })
    );
    assert_eq!(results[4], Ok(Output::Bool(false)));
}

#[test]
fn test_execute_many_transfer_chain() {
    let executor = create_test_executor();
    let results = executor.execute_many(vec![
        Command::InitLedger,
        Command::TransferInsurance {
            id: 2u64.into(),
            new_owner: "Tom".into(),
        },
        Command::TransferInsurance {
            id: 2u64.into(),
            new_owner: "Ann".into(),
        },
    ]);

    assert_eq!(results[0], Ok(Output::Unit));
    assert_eq!(results[1], Ok(Output::PreviousOwner(None)));
    assert_eq!(results[2], Ok(Output::PreviousOwner(Some("Tom".into()))));
}
