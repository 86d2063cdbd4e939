//! Payment ledger port.
//!
//! Append-only payment and invoice history. Appends never fail for business
//! reasons, only on infrastructure failure, and records are immutable after
//! append.

use crate::domain::foundation::{ClinicId, DomainError};
use crate::domain::payment::PaymentRecord;
use async_trait::async_trait;

/// Append-only ledger of payment records.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Append a record to the ledger.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on persistence failure
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// List all records for a clinic in reverse-chronological insertion
    /// order (newest first).
    async fn list_by_clinic(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Vec<PaymentRecord>, DomainError>;
}
