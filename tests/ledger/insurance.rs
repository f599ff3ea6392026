//! Insurance (insurer) Tests

use crate::common::*;
use insurechain::{Error, RecordKind};

#[test]
fn create_read_update() {
    let (executor, _state) = create_executor();

    assert_eq!(
        invoke(&executor, "CreateInsurance", &["13", "Insurance", "xyyx"]),
        r#"{"InsuranceId":13,"Name":"xyyx","Role":"Insurance"}"#
    );
    invoke(&executor, "UpdateInsurance", &["13", "Insurance", "rrrr"]);
    assert_eq!(
        invoke(&executor, "ReadInsurance", &["13"]),
        r#"{"InsuranceId":13,"Name":"rrrr","Role":"Insurance"}"#
    );
}

#[test]
fn update_missing_insurer() {
    let ledger = seeded_ledger();
    let err = ledger.update_insurance(70u64, "Insurance", "x").unwrap_err();
    assert_eq!(err.to_string(), "The Insurance 70 does not exist");
}

#[test]
fn get_all_excludes_claims() {
    // "insurance~" and "insuranceobject~" share a leading prefix
    let ledger = seeded_ledger();
    let insurers = entries(&ledger.get_all_insurance().unwrap());
    assert_eq!(insurers.len(), 6);
    assert!(insurers.iter().all(|i| i.get("InsuranceId").is_some() && i.get("Type").is_none()));
}

#[test]
fn same_id_across_kinds_does_not_collide() {
    let (executor, state) = create_executor();
    invoke(&executor, "CreateInsurance", &["1", "Insurance", "ins"]);
    invoke(
        &executor,
        "CreateInsuranceObject",
        &["1", "Car", "0", "100", "a", "b", "c"],
    );
    invoke(&executor, "CreateCustomer", &["1", "Customer", "cust"]);
    invoke(&executor, "CreateBank", &["1", "Bank", "bank"]);

    assert_eq!(state.len(), 4);
    invoke(&executor, "DeleteInsurance", &["1"]);
    assert_eq!(invoke(&executor, "InsuranceObjectExists", &["1"]), "true");
    assert!(get_raw(&*state, RecordKind::Insurance, 1).is_none());
}

#[test]
fn transfer_insurer() {
    let ledger = seeded_ledger();
    assert_eq!(ledger.transfer_insurance(1u64, "Tom").unwrap(), None);
    assert!(ledger.read_insurance(1u64).unwrap().contains(r#""Owner":"Tom""#));
    assert!(matches!(
        ledger.delete_insurance(7u64),
        Err(Error::NotFound { .. })
    ));
}
