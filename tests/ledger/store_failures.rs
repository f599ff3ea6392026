//! Store Failure Tests
//!
//! Rejections from the world state surface unchanged as `StoreFailure`.

use crate::common::*;
use insurechain::{Error, RecordKind};
use insurechain_storage::testing::FaultPoint;

#[test]
fn create_put_failure() {
    let (executor, state) = create_faulty_executor();
    state.arm(FaultPoint::Put);

    let err = executor
        .invoke("CreateCustomer", &["1", "Customer", "x"])
        .unwrap_err();
    assert_eq!(
        err,
        Error::StoreFailure {
            reason: "injected put failure".into()
        }
    );
    assert!(state.inner().is_empty());
}

#[test]
fn read_get_failure() {
    let (executor, state) = create_faulty_executor();
    invoke(&executor, "CreateBank", &["1", "Bank", "b"]);
    state.arm(FaultPoint::Get);

    assert!(matches!(
        executor.invoke("ReadBank", &["1"]),
        Err(Error::StoreFailure { .. })
    ));
    assert!(matches!(
        executor.invoke("BankExists", &["1"]),
        Err(Error::StoreFailure { .. })
    ));
}

#[test]
fn get_all_range_failure() {
    let (executor, state) = create_faulty_executor();
    state.arm(FaultPoint::Range);
    assert!(matches!(
        executor.invoke("GetAllCustomers", &[] as &[&str]),
        Err(Error::StoreFailure { .. })
    ));
}

#[test]
fn delete_failure_keeps_record() {
    let (executor, state) = create_faulty_executor();
    invoke(&executor, "CreateInsurance", &["4", "Insurance", "i"]);
    state.arm(FaultPoint::Delete);

    assert!(executor.invoke("DeleteInsurance", &["4"]).is_err());
    state.disarm_all();
    assert_eq!(invoke(&executor, "InsuranceExists", &["4"]), "true");
}

#[test]
fn init_ledger_stops_at_failed_write() {
    let (executor, state) = create_faulty_executor();
    state.arm_after(FaultPoint::Put, 10);

    assert!(matches!(
        executor.invoke("InitLedger", &[] as &[&str]),
        Err(Error::StoreFailure { .. })
    ));
    // Writes before the failure stay written
    assert_eq!(state.inner().len(), 10);
    assert!(get_raw(state.inner(), RecordKind::Customer, 6).is_some());
    assert!(get_raw(state.inner(), RecordKind::Insurance, 5).is_none());
}

#[test]
fn transfer_put_failure_keeps_owner() {
    let (executor, state) = create_faulty_executor();
    invoke(&executor, "CreateBank", &["1", "Bank", "b"]);
    state.arm(FaultPoint::Put);

    assert!(executor.invoke("TransferBank", &["1", "Tom"]).is_err());
    state.disarm(FaultPoint::Put);
    assert!(!invoke(&executor, "ReadBank", &["1"]).contains("Owner"));
}
