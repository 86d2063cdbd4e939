//! ListPaymentsHandler - Query handler for a clinic's payment history.

use std::sync::Arc;

use crate::domain::foundation::ClinicId;
use crate::domain::payment::PaymentRecord;
use crate::domain::subscription::SubscriptionError;
use crate::ports::PaymentLedger;

/// Query for a clinic's payment history.
#[derive(Debug, Clone)]
pub struct ListPaymentsQuery {
    pub clinic_id: ClinicId,
}

/// Payment history, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPaymentsResult {
    pub records: Vec<PaymentRecord>,
}

/// Handler for listing a clinic's payments.
///
/// A clinic with no payments yields an empty history, not an error.
pub struct ListPaymentsHandler {
    ledger: Arc<dyn PaymentLedger>,
}

impl ListPaymentsHandler {
    pub fn new(ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        query: ListPaymentsQuery,
    ) -> Result<ListPaymentsResult, SubscriptionError> {
        let records = self.ledger.list_by_clinic(&query.clinic_id).await?;
        Ok(ListPaymentsResult { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPaymentLedger;
    use crate::domain::foundation::{PaymentId, Timestamp};

    fn clinic_id() -> ClinicId {
        ClinicId::new("najot").unwrap()
    }

    fn record(amount_minor: i64) -> PaymentRecord {
        PaymentRecord::manual_extension(
            PaymentId::new(),
            clinic_id(),
            "Najot Shifo",
            "CRM",
            amount_minor,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn returns_records_newest_first() {
        let ledger = Arc::new(InMemoryPaymentLedger::new());
        ledger.append(&record(100)).await.unwrap();
        ledger.append(&record(200)).await.unwrap();

        let result = ListPaymentsHandler::new(ledger)
            .handle(ListPaymentsQuery { clinic_id: clinic_id() })
            .await
            .unwrap();

        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].amount_minor, 200);
        assert_eq!(result.records[1].amount_minor, 100);
    }

    #[tokio::test]
    async fn unknown_clinic_yields_empty_history() {
        let ledger = Arc::new(InMemoryPaymentLedger::new());

        let result = ListPaymentsHandler::new(ledger)
            .handle(ListPaymentsQuery { clinic_id: clinic_id() })
            .await
            .unwrap();

        assert!(result.records.is_empty());
    }
}
