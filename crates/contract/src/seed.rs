//! Ledger seed data
//!
//! Six records per kind with ids 1..=6, each tagged with its `docType`.
//! Written in kind order: customers, insurers, claims, banks.

use insurechain_core::{AnyRecord, Bank, ClaimStatus, Customer, Insurance, InsuranceObject, Record};

/// Records seeded for each kind
pub const SEED_COUNT_PER_KIND: usize = 6;

const NAMES: [&str; SEED_COUNT_PER_KIND] = ["xxyy", "yyxx", "xyxy", "yxyx", "xyyx", "yxxy"];

const CLAIMS: [(ClaimStatus, u64); SEED_COUNT_PER_KIND] = [
    (ClaimStatus::Filed, 8800),
    (ClaimStatus::Inspected, 7689),
    (ClaimStatus::Approved, 4532),
    (ClaimStatus::Rejected, 9867),
    (ClaimStatus::Inspected, 9867),
    (ClaimStatus::Rejected, 5555),
];

fn tagged<R: Record>(mut record: R) -> R {
    record.tag_doc_type();
    record
}

fn ids() -> impl Iterator<Item = u64> {
    1..=SEED_COUNT_PER_KIND as u64
}

/// Every seed record, in write order
pub fn seed_records() -> Vec<AnyRecord> {
    let customers = ids()
        .zip(NAMES)
        .map(|(id, name)| AnyRecord::from(tagged(Customer::new(id, "Customer", name))));

    let insurers = ids()
        .zip(NAMES)
        .map(|(id, name)| AnyRecord::from(tagged(Insurance::new(id, "Insurance", name))));

    let claims = ids().zip(CLAIMS).map(|(id, (status, amount))| {
        AnyRecord::from(tagged(InsuranceObject::new(
            id, "Car", status, amount, "yes", "yes", "yes",
        )))
    });

    let banks = ids()
        .zip(NAMES)
        .map(|(id, name)| AnyRecord::from(tagged(Bank::new(id, "Bank", name))));

    customers
        .chain(insurers)
        .chain(claims)
        .chain(banks)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insurechain_core::{RecordId, RecordKind};
    use std::collections::HashSet;

    #[test]
    fn test_six_per_kind() {
        let records = seed_records();
        assert_eq!(records.len(), 4 * SEED_COUNT_PER_KIND);
        for kind in RecordKind::ALL {
            let ids: Vec<_> = records
                .iter()
                .filter(|r| r.kind() == kind)
                .map(|r| r.id())
                .collect();
            assert_eq!(ids, (1..=6).map(RecordId::new).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_keys_unique() {
        let keys: HashSet<_> = seed_records().iter().map(|r| r.state_key()).collect();
        assert_eq!(keys.len(), 24);
    }

    #[test]
    fn test_first_claim() {
        let records = seed_records();
        let claim = records
            .iter()
            .find(|r| r.kind() == RecordKind::InsuranceObject)
            .unwrap();
        assert_eq!(
            insurechain_core::to_canonical_string(claim).unwrap(),
            r#"{"Adhar":"yes","Amount":8800,"DamageImages":"yes","InsuranceId":1,"Status":0,"Type":"Car","VerifiedInvoice":"yes","docType":"InsuranceObject"}"#
        );
    }

    #[test]
    fn test_last_bank() {
        let records = seed_records();
        let bank = records.last().unwrap();
        assert_eq!(bank.kind(), RecordKind::Bank);
        assert_eq!(
            insurechain_core::to_canonical_string(bank).unwrap(),
            r#"{"BankId":6,"Name":"yxxy","Role":"Bank","docType":"Bank"}"#
        );
    }
}
