//! Persistence Tests
//!
//! A flushed world state reopened from its snapshot file behaves the same.

use crate::common::*;
use insurechain::{AccessMode, Error, Ledger, OpenOptions};
use tempfile::TempDir;

#[test]
fn reopen_yields_same_get_all() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger").join("state.json");

    let ledger = Ledger::open(&path, OpenOptions::new().init_ledger(true)).unwrap();
    ledger.create_customer(13u64, "Customer", "xyyx").unwrap();
    ledger.transfer_insurance_object(2u64, "Tom").unwrap();
    ledger.flush().unwrap();

    let before = [
        ledger.get_all_customers().unwrap(),
        ledger.get_all_insurance().unwrap(),
        ledger.get_all_insurance_object().unwrap(),
        ledger.get_all_bank().unwrap(),
    ];
    drop(ledger);

    let reopened = Ledger::open(&path, OpenOptions::new()).unwrap();
    let after = [
        reopened.get_all_customers().unwrap(),
        reopened.get_all_insurance().unwrap(),
        reopened.get_all_insurance_object().unwrap(),
        reopened.get_all_bank().unwrap(),
    ];
    assert_eq!(before, after);
}

#[test]
fn unflushed_writes_are_lost() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let ledger = Ledger::open(&path, OpenOptions::new()).unwrap();
    ledger.create_bank(1u64, "Bank", "b").unwrap();
    drop(ledger);

    let reopened = Ledger::open(&path, OpenOptions::new()).unwrap();
    assert!(!reopened.bank_exists(1u64).unwrap());
}

#[test]
fn second_init_ledger_fails() {
    let ledger = seeded_ledger();
    let err = ledger.init_ledger().unwrap_err();
    assert_eq!(err.to_string(), "The Customer 1 already exists");
    assert_eq!(ledger.state().len(), 24);
}

#[test]
fn read_only_ledger_rejects_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    Ledger::open(&path, OpenOptions::new().init_ledger(true)).unwrap();

    let ro = Ledger::open(&path, OpenOptions::new().access_mode(AccessMode::ReadOnly)).unwrap();
    for (function, args) in [
        ("InitLedger", vec![]),
        ("CreateCustomer", vec!["20", "Customer", "x"]),
        ("UpdateBank", vec!["1", "Bank", "x"]),
        ("DeleteInsurance", vec!["1"]),
        ("TransferInsuranceObject", vec!["1", "Tom"]),
    ] {
        assert!(
            matches!(
                ro.invoke(function, args.as_slice()),
                Err(Error::AccessDenied { .. })
            ),
            "{}",
            function
        );
    }

    assert!(!ro.invoke("ReadCustomer", &["1"]).unwrap().to_payload().is_empty());
    assert_eq!(entries(&ro.get_all_customers().unwrap()).len(), 6);
}

#[test]
fn corrupt_snapshot_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not a snapshot").unwrap();

    assert!(matches!(
        Ledger::open(&path, OpenOptions::new()),
        Err(Error::Corruption { .. })
    ));
}
