//! InsuranceObject (claim) Tests

use crate::common::*;
use insurechain::{ClaimStatus, Error, InsuranceObject, RecordKind};

#[test]
fn create_claim_from_string_arguments() {
    let (executor, _state) = create_executor();

    assert_eq!(
        invoke(
            &executor,
            "CreateInsuranceObject",
            &["13", "Car", "0", "45000", "yes", "yes", "yes"]
        ),
        r#"{"Adhar":"yes","Amount":45000,"DamageImages":"yes","InsuranceId":13,"Status":0,"Type":"Car","VerifiedInvoice":"yes"}"#
    );
}

#[test]
fn seeded_claims_carry_status_codes() {
    let ledger = seeded_ledger();
    let claims = entries(&ledger.get_all_insurance_object().unwrap());

    let statuses: Vec<u64> = claims.iter().map(|c| c["Status"].as_u64().unwrap()).collect();
    assert_eq!(statuses, vec![0, 1, 2, 3, 1, 3]);
    assert_eq!(claims[0]["Amount"], 8800);
    assert_eq!(claims[0]["docType"], "InsuranceObject");
}

#[test]
fn invalid_status_rejected() {
    let (executor, state) = create_executor();
    let err = executor
        .invoke(
            "CreateInsuranceObject",
            &["1", "Car", "9", "100", "a", "b", "c"],
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(state.is_empty());
}

#[test]
fn invalid_amount_rejected() {
    let (executor, _state) = create_executor();
    assert!(matches!(
        executor.invoke(
            "CreateInsuranceObject",
            &["1", "Car", "0", "lots", "a", "b", "c"]
        ),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn claim_moves_through_stages() {
    let ledger = seeded_ledger();
    ledger.transfer_insurance_object(1u64, "Tom").unwrap();
    ledger.set_claim_status(1u64, ClaimStatus::Inspected).unwrap();
    ledger.set_claim_status(1u64, ClaimStatus::Rejected).unwrap();

    let claim: serde_json::Value =
        serde_json::from_str(&ledger.read_insurance_object(1u64).unwrap()).unwrap();
    assert_eq!(claim["Status"], 3);
    assert_eq!(claim["Amount"], 8800);
    assert_eq!(claim["Owner"], "Tom");
    assert_eq!(claim["docType"], "InsuranceObject");
}

#[test]
fn transfer_claim_keeps_fields() {
    let ledger = seeded_ledger();
    assert_eq!(ledger.transfer_insurance_object(2u64, "Bank").unwrap(), None);

    let claim: serde_json::Value =
        serde_json::from_str(&ledger.read_insurance_object(2u64).unwrap()).unwrap();
    assert_eq!(claim["Owner"], "Bank");
    assert_eq!(claim["Amount"], 7689);
    assert_eq!(claim["Status"], 1);
}

#[test]
fn transfer_of_unreadable_claim_fails() {
    let (executor, state) = create_executor();
    put_raw(&*state, RecordKind::InsuranceObject, 3, b"not json");

    assert!(matches!(
        executor.invoke("TransferInsuranceObject", &["3", "Tom"]),
        Err(Error::Serialization { .. })
    ));
    assert_eq!(
        get_raw(&*state, RecordKind::InsuranceObject, 3).unwrap(),
        b"not json".to_vec()
    );
}

#[test]
fn update_claim_via_ledger() {
    let ledger = seeded_ledger();
    let claim = InsuranceObject::new(6u64, "Bike", ClaimStatus::Approved, 1200, "a", "b", "c");
    ledger.update_insurance_object(claim).unwrap();

    let stored: serde_json::Value =
        serde_json::from_str(&ledger.read_insurance_object(6u64).unwrap()).unwrap();
    assert_eq!(stored["Type"], "Bike");
    assert_eq!(stored["Status"], 2);
    assert!(stored.get("docType").is_none());
}
