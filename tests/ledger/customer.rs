//! Customer Tests
//!
//! The walkthrough a client runs against a freshly seeded ledger, plus the
//! lifecycle errors of the customer functions.

use crate::common::*;
use insurechain::{Error, Ledger, RecordId, RecordKind};

#[test]
fn seeded_customers_listed_in_id_order() {
    let ledger = seeded_ledger();
    let all = entries(&ledger.get_all_customers().unwrap());

    assert_eq!(all.len(), 6);
    let ids: Vec<u64> = all
        .iter()
        .map(|c| c["CustomerId"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(all[0]["Name"], "xxyy");
    assert_eq!(all[0]["docType"], "Customer");
}

#[test]
fn client_walkthrough() {
    let (executor, _state) = create_executor();

    assert_eq!(invoke(&executor, "InitLedger", &[]), "");
    assert_eq!(
        invoke(&executor, "CreateCustomer", &["13", "Customer", "xyyx"]),
        r#"{"CustomerId":13,"Name":"xyyx","Role":"Customer"}"#
    );
    assert_eq!(
        invoke(&executor, "ReadCustomer", &["13"]),
        r#"{"CustomerId":13,"Name":"xyyx","Role":"Customer"}"#
    );
    assert_eq!(invoke(&executor, "CustomerExists", &["1"]), "true");
    assert_eq!(
        invoke(&executor, "UpdateCustomer", &["1", "Customer", "rrrr"]),
        ""
    );

    let err = executor
        .invoke("UpdateCustomer", &["70", "Customer", "tyty"])
        .unwrap_err();
    assert_eq!(err.to_string(), "The Customer 70 does not exist");

    assert_eq!(invoke(&executor, "TransferCustomer", &["1", "Tom"]), "");
    assert_eq!(
        invoke(&executor, "ReadCustomer", &["1"]),
        r#"{"CustomerId":1,"Name":"rrrr","Owner":"Tom","Role":"Customer"}"#
    );
}

#[test]
fn duplicate_create_leaves_store_unchanged() {
    let (executor, state) = create_executor();
    invoke(&executor, "CreateCustomer", &["1", "Customer", "first"]);

    let err = executor
        .invoke("CreateCustomer", &["1", "Customer", "second"])
        .unwrap_err();
    assert_eq!(
        err,
        Error::AlreadyExists {
            kind: RecordKind::Customer,
            id: RecordId::new(1)
        }
    );
    assert_eq!(err.to_string(), "The Customer 1 already exists");
    assert_eq!(
        get_raw(&*state, RecordKind::Customer, 1).unwrap(),
        br#"{"CustomerId":1,"Name":"first","Role":"Customer"}"#.to_vec()
    );
}

#[test]
fn delete_then_read_fails() {
    let (executor, _state) = create_executor();
    invoke(&executor, "CreateCustomer", &["2", "Customer", "gone"]);
    invoke(&executor, "DeleteCustomer", &["2"]);

    assert_eq!(invoke(&executor, "CustomerExists", &["2"]), "false");
    assert!(matches!(
        executor.invoke("ReadCustomer", &["2"]),
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        executor.invoke("DeleteCustomer", &["2"]),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn second_transfer_returns_previous_owner() {
    let ledger = seeded_ledger();
    assert_eq!(ledger.transfer_customer(4u64, "Tom").unwrap(), None);
    assert_eq!(
        ledger.transfer_customer(4u64, "Ann").unwrap(),
        Some("Tom".to_string())
    );
}

#[test]
fn update_drops_owner() {
    let ledger = seeded_ledger();
    ledger.transfer_customer(2u64, "Tom").unwrap();
    ledger.update_customer(2u64, "Customer", "new").unwrap();
    assert!(!ledger.read_customer(2u64).unwrap().contains("Owner"));
}

#[test]
fn transfer_missing_customer() {
    let ledger = Ledger::ephemeral();
    assert!(matches!(
        ledger.transfer_customer(99u64, "Tom"),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn empty_value_counts_as_absent() {
    let (executor, state) = create_executor();
    put_raw(&*state, RecordKind::Customer, 5, b"");

    assert_eq!(invoke(&executor, "CustomerExists", &["5"]), "false");
    assert!(executor.invoke("ReadCustomer", &["5"]).is_err());
    // An empty slot may be created over
    invoke(&executor, "CreateCustomer", &["5", "Customer", "x"]);
}
