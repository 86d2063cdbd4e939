//! In-memory payment ledger.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{ClinicId, DomainError};
use crate::domain::payment::PaymentRecord;
use crate::ports::PaymentLedger;

/// Append-only in-memory ledger.
///
/// Records are stored in insertion order; `list_by_clinic` reverses it so
/// the newest record comes first.
#[derive(Default)]
pub struct InMemoryPaymentLedger {
    records: RwLock<Vec<PaymentRecord>>,
}

impl InMemoryPaymentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all records in insertion order (test helper).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn all_records(&self) -> Vec<PaymentRecord> {
        self.records
            .read()
            .expect("InMemoryPaymentLedger: lock poisoned")
            .clone()
    }

    /// Returns the number of appended records (test helper).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn record_count(&self) -> usize {
        self.records
            .read()
            .expect("InMemoryPaymentLedger: lock poisoned")
            .len()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn append(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| DomainError::unavailable("payment ledger lock poisoned"))?;
        records.push(record.clone());
        Ok(())
    }

    async fn list_by_clinic(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Vec<PaymentRecord>, DomainError> {
        let records = self
            .records
            .read()
            .map_err(|_| DomainError::unavailable("payment ledger lock poisoned"))?;
        Ok(records
            .iter()
            .rev()
            .filter(|r| &r.clinic_id == clinic_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PaymentId, Timestamp};

    fn clinic() -> ClinicId {
        ClinicId::new("najot").unwrap()
    }

    fn record(amount: i64) -> PaymentRecord {
        PaymentRecord::manual_extension(
            PaymentId::new(),
            clinic(),
            "Najot Shifo",
            "CRM",
            amount,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn append_then_list_returns_record() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.append(&record(100)).await.unwrap();

        let listed = ledger.list_by_clinic(&clinic()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount_minor, 100);
    }

    #[tokio::test]
    async fn list_is_reverse_chronological() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.append(&record(100)).await.unwrap();
        ledger.append(&record(200)).await.unwrap();
        ledger.append(&record(300)).await.unwrap();

        let listed = ledger.list_by_clinic(&clinic()).await.unwrap();
        let amounts: Vec<i64> = listed.iter().map(|r| r.amount_minor).collect();
        assert_eq!(amounts, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn list_filters_by_clinic() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.append(&record(100)).await.unwrap();

        let other = ClinicId::new("medline").unwrap();
        assert!(ledger.list_by_clinic(&other).await.unwrap().is_empty());
    }
}
