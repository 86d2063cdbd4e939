//! ChangePlanHandler - Command handler for moving a clinic to another plan.

use std::sync::Arc;

use crate::domain::foundation::ClinicId;
use crate::domain::plan::PlanCatalog;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{Clock, SubscriptionRepository};

/// Command to move a clinic's subscription to a different plan.
#[derive(Debug, Clone)]
pub struct ChangePlanCommand {
    pub clinic_id: ClinicId,
    pub plan_name: String,
}

/// Result of a successful plan change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePlanResult {
    pub subscription: Subscription,
    /// True when a downgrade left the clinic with more doctors than the new
    /// plan allows. Existing usage is never truncated.
    pub over_doctor_limit: bool,
}

/// Handler for plan changes.
///
/// The new plan must exist in the catalog; the seat limit is resolved here
/// and stamped onto the subscription, never re-derived on read.
pub struct ChangePlanHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    catalog: PlanCatalog,
    clock: Arc<dyn Clock>,
}

impl ChangePlanHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        catalog: PlanCatalog,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscriptions,
            catalog,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: ChangePlanCommand,
    ) -> Result<ChangePlanResult, SubscriptionError> {
        // 1. Resolve the seat limit from the catalog
        let doctors_limit = self
            .catalog
            .doctors_limit_for(&cmd.plan_name)
            .ok_or_else(|| SubscriptionError::unknown_plan(cmd.plan_name.clone()))?;

        // 2. Load the clinic's subscription
        let mut subscription = self
            .subscriptions
            .find_by_clinic_id(&cmd.clinic_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.clinic_id.clone()))?;

        // 3. Apply the plan change (domain logic)
        subscription.change_plan(cmd.plan_name, doctors_limit, self.clock.now());

        // 4. Persist the update
        self.subscriptions.update(&subscription).await?;

        let over_doctor_limit = subscription.is_over_doctor_limit();
        if over_doctor_limit {
            tracing::warn!(
                clinic_id = %subscription.clinic_id,
                plan_name = %subscription.plan_name,
                doctors_used = subscription.doctors_used,
                doctors_limit = subscription.doctors_limit,
                "clinic is over its doctor seat limit after plan change"
            );
        }

        Ok(ChangePlanResult {
            subscription,
            over_doctor_limit,
        })
    }
}
