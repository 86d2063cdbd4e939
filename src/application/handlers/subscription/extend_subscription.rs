//! ExtendSubscriptionHandler - Command handler for extending subscriptions.

use std::sync::Arc;

use crate::domain::foundation::ClinicId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{Clock, SubscriptionRepository};

/// Command to extend a clinic's subscription by whole calendar months.
#[derive(Debug, Clone)]
pub struct ExtendSubscriptionCommand {
    pub clinic_id: ClinicId,
    pub months: i32,
}

/// Result of a successful extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendSubscriptionResult {
    pub subscription: Subscription,
}

/// Handler for extending subscriptions.
///
/// Day-of-month is preserved across the extension where the target month
/// has that day, otherwise clamped to the target month's last day.
pub struct ExtendSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
}

impl ExtendSubscriptionHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            subscriptions,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExtendSubscriptionCommand,
    ) -> Result<ExtendSubscriptionResult, SubscriptionError> {
        // 1. Validate months before touching the store
        if cmd.months <= 0 {
            return Err(SubscriptionError::invalid_months(cmd.months));
        }

        // 2. Load the clinic's subscription
        let mut subscription = self
            .subscriptions
            .find_by_clinic_id(&cmd.clinic_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.clinic_id.clone()))?;

        // 3. Move the expiry date (domain logic)
        subscription
            .extend(cmd.months, self.clock.now())
            .map_err(|_| SubscriptionError::invalid_months(cmd.months))?;

        // 4. Persist the update
        self.subscriptions.update(&subscription).await?;

        tracing::info!(
            clinic_id = %subscription.clinic_id,
            months = cmd.months,
            expiry_date = %subscription.expiry_date,
            "subscription extended"
        );

        Ok(ExtendSubscriptionResult { subscription })
    }
}
