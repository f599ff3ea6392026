//! Bank Tests

use crate::common::*;
use insurechain::{Error, Output};

#[test]
fn bank_lifecycle() {
    let ledger = seeded_ledger();

    assert_eq!(
        ledger.create_bank(13u64, "Bank", "xyyx").unwrap(),
        r#"{"BankId":13,"Name":"xyyx","Role":"Bank"}"#
    );
    assert!(ledger.bank_exists(13u64).unwrap());
    ledger.update_bank(13u64, "Bank", "rrrr").unwrap();
    ledger.delete_bank(13u64).unwrap();
    assert!(!ledger.bank_exists(13u64).unwrap());
    assert_eq!(entries(&ledger.get_all_bank().unwrap()).len(), 6);
}

#[test]
fn get_all_includes_undecodable_values() {
    let (executor, state) = create_executor();
    invoke(&executor, "CreateBank", &["1", "Bank", "one"]);
    put_raw(&*state, insurechain::RecordKind::Bank, 2, b"\x00raw bytes");
    invoke(&executor, "CreateBank", &["3", "Bank", "three"]);

    let all = entries(&invoke(&executor, "GetAllBank", &[]));
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["Name"], "one");
    assert_eq!(all[1], serde_json::Value::String("\u{0}raw bytes".into()));
    assert_eq!(all[2]["Name"], "three");
}

#[test]
fn get_all_orders_by_numeric_id() {
    let (executor, _state) = create_executor();
    for id in ["10", "9", "100", "1"] {
        invoke(&executor, "CreateBank", &[id, "Bank", "b"]);
    }

    let ids: Vec<u64> = entries(&invoke(&executor, "GetAllBank", &[]))
        .iter()
        .map(|b| b["BankId"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 9, 10, 100]);
}

#[test]
fn get_all_on_empty_ledger() {
    let (executor, _state) = create_executor();
    assert_eq!(
        executor.invoke("GetAllBank", &[] as &[&str]).unwrap(),
        Output::Records("[]".into())
    );
}

#[test]
fn unknown_function() {
    let (executor, _state) = create_executor();
    assert!(matches!(
        executor.invoke("WithdrawBank", &["1"]),
        Err(Error::UnknownFunction { .. })
    ));
}

#[test]
fn wrong_arity() {
    let (executor, state) = create_executor();
    let err = executor.invoke("CreateBank", &["1", "Bank"]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(state.is_empty());
}
