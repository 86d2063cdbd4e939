//! Payment domain module.
//!
//! The payment ledger is an append-only audit trail: records are created by
//! direct extensions or approved extension requests and never mutated.

mod record;

pub use record::{PaymentRecord, PaymentSource, PaymentStatus};
