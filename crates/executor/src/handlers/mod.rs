//! Command handlers organized by concern.
//!
//! | Module | Commands | Contract call |
//! |--------|----------|---------------|
//! | `record` | 28 | `RecordContract` CRUD, transfer and get-all, generic over the kind |
//! | `ledger` | 1 | `RecordContract::init_ledger` |

pub mod ledger;
pub mod record;
