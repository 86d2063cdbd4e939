//! Immutable payment ledger record.
//!
//! # Design Decisions
//!
//! - **Money in minor units**: All monetary values are i64 minor currency
//!   units (tiyin/cents), never floats or formatted strings.
//! - **Append-only**: Records are never updated or deleted after append.
//! - **Closed enums**: Status and source reject unknown values at the
//!   boundary instead of accepting arbitrary strings.

use crate::domain::foundation::{ClinicId, PaymentId, Timestamp};
use serde::{Deserialize, Serialize};

/// Outcome of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment completed.
    Success,
    /// Payment initiated, not yet confirmed.
    Pending,
    /// Invoice issued, waiting for the clinic to pay.
    Awaiting,
    /// Payment attempt failed.
    Failed,
}

/// Channel through which a payment arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSource {
    Payme,
    Click,
    Bot,
    /// Applied by a platform operator, e.g. on request approval.
    Manual,
}

/// A single entry in the payment ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier for this record.
    pub id: PaymentId,

    /// When the payment was recorded.
    pub date: Timestamp,

    /// Amount in minor currency units.
    pub amount_minor: i64,

    /// Plan the payment was made for.
    pub plan_name: String,

    /// Outcome of the payment.
    pub status: PaymentStatus,

    /// Clinic that made the payment.
    pub clinic_id: ClinicId,

    /// Clinic display name at the time of payment.
    pub clinic_name: String,

    /// Channel the payment arrived through.
    pub source: PaymentSource,

    /// Whether an invoice document has been generated for this record.
    pub invoice_generated: bool,
}

impl PaymentRecord {
    /// Builds the ledger entry for a manually applied extension.
    ///
    /// Used when an operator approves an extension request: the payment is
    /// recorded as already successful with no invoice generated yet.
    pub fn manual_extension(
        id: PaymentId,
        clinic_id: ClinicId,
        clinic_name: impl Into<String>,
        plan_name: impl Into<String>,
        amount_minor: i64,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            date,
            amount_minor,
            plan_name: plan_name.into(),
            status: PaymentStatus::Success,
            clinic_id,
            clinic_name: clinic_name.into(),
            source: PaymentSource::Manual,
            invoice_generated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_clinic_id() -> ClinicId {
        ClinicId::new("najot").unwrap()
    }

    #[test]
    fn manual_extension_is_successful_manual_payment() {
        let record = PaymentRecord::manual_extension(
            PaymentId::new(),
            test_clinic_id(),
            "Najot Shifo",
            "CRM + Telegram",
            1_500_000,
            Timestamp::now(),
        );

        assert_eq!(record.status, PaymentStatus::Success);
        assert_eq!(record.source, PaymentSource::Manual);
        assert_eq!(record.amount_minor, 1_500_000);
        assert!(!record.invoice_generated);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::Awaiting).unwrap();
        assert_eq!(json, "\"awaiting\"");
    }

    #[test]
    fn source_rejects_unknown_values() {
        let result: Result<PaymentSource, _> = serde_json::from_str("\"cash\"");
        assert!(result.is_err());
    }

    #[test]
    fn source_roundtrips_known_values() {
        for (source, expected) in [
            (PaymentSource::Payme, "\"payme\""),
            (PaymentSource::Click, "\"click\""),
            (PaymentSource::Bot, "\"bot\""),
            (PaymentSource::Manual, "\"manual\""),
        ] {
            assert_eq!(serde_json::to_string(&source).unwrap(), expected);
        }
    }
}
