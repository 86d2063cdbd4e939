//! ToggleAutoRenewalHandler - Command handler for the auto-renewal flag.

use std::sync::Arc;

use crate::domain::foundation::ClinicId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{Clock, SubscriptionRepository};

/// Command to flip a clinic's auto-renewal flag.
#[derive(Debug, Clone)]
pub struct ToggleAutoRenewalCommand {
    pub clinic_id: ClinicId,
}

/// Result of a successful toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAutoRenewalResult {
    pub subscription: Subscription,
    /// The flag's value after the toggle.
    pub auto_renewal: bool,
}

/// Handler for toggling auto-renewal.
pub struct ToggleAutoRenewalHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
}

impl ToggleAutoRenewalHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            subscriptions,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: ToggleAutoRenewalCommand,
    ) -> Result<ToggleAutoRenewalResult, SubscriptionError> {
        // 1. Load the clinic's subscription
        let mut subscription = self
            .subscriptions
            .find_by_clinic_id(&cmd.clinic_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.clinic_id.clone()))?;

        // 2. Flip the flag (domain logic)
        let auto_renewal = subscription.toggle_auto_renewal(self.clock.now());

        // 3. Persist the update
        self.subscriptions.update(&subscription).await?;

        tracing::info!(
            clinic_id = %subscription.clinic_id,
            auto_renewal,
            "auto-renewal toggled"
        );

        Ok(ToggleAutoRenewalResult {
            subscription,
            auto_renewal,
        })
    }
}
