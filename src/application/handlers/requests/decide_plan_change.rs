//! DecidePlanChangeHandler - Command handler for deciding plan-change requests.

use std::sync::Arc;

use crate::application::handlers::subscription::{ChangePlanCommand, ChangePlanHandler};
use crate::application::notify;
use crate::domain::foundation::RequestId;
use crate::domain::request::{PlanChangeRequest, RequestError};
use crate::domain::subscription::Subscription;
use crate::ports::{
    Clock, NotificationChannel, NotificationGateway, PlanChangeRequestRepository,
};

/// Command recording the operator's decision on a plan-change request.
#[derive(Debug, Clone)]
pub struct DecidePlanChangeCommand {
    pub request_id: RequestId,
    pub approved: bool,
    pub comment: Option<String>,
}

/// Result of a recorded decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecidePlanChangeResult {
    pub request: PlanChangeRequest,
    /// Updated subscription, present only on approval.
    pub subscription: Option<Subscription>,
}

/// Handler for deciding plan-change requests.
///
/// The decision is claimed with a status-guarded compare-and-set before the
/// plan change is applied, and the claim is rolled back if applying fails.
/// The requesting clinic is told the outcome either way, including the
/// operator's comment on rejection.
pub struct DecidePlanChangeHandler {
    requests: Arc<dyn PlanChangeRequestRepository>,
    change_plan: Arc<ChangePlanHandler>,
    gateway: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
}

impl DecidePlanChangeHandler {
    pub fn new(
        requests: Arc<dyn PlanChangeRequestRepository>,
        change_plan: Arc<ChangePlanHandler>,
        gateway: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            requests,
            change_plan,
            gateway,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: DecidePlanChangeCommand,
    ) -> Result<DecidePlanChangeResult, RequestError> {
        // 1. The request must exist
        let found = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| RequestError::not_found(cmd.request_id))?;

        // 2. Claim the decision: only the caller whose guard matches wins
        let now = self.clock.now();
        let request = match self
            .requests
            .transition_if_pending(&cmd.request_id, cmd.approved, cmd.comment.clone(), now)
            .await?
        {
            Some(request) => request,
            None => {
                // A concurrent decision won between the find and the claim.
                let current = self
                    .requests
                    .find_by_id(&cmd.request_id)
                    .await?
                    .map(|r| r.status)
                    .unwrap_or(found.status);
                return Err(RequestError::invalid_state(current));
            }
        };

        let clinic_channel = NotificationChannel::Clinic(request.clinic_id.clone());

        if !cmd.approved {
            tracing::info!(
                request_id = %request.id,
                clinic_id = %request.clinic_id,
                "plan-change request rejected"
            );
            notify::send_best_effort(
                &self.gateway,
                clinic_channel,
                notify::plan_change_decided(&request, false),
            )
            .await;
            return Ok(DecidePlanChangeResult {
                request,
                subscription: None,
            });
        }

        // 3. Apply the approval through the subscription manager
        let changed = match self
            .change_plan
            .handle(ChangePlanCommand {
                clinic_id: request.clinic_id.clone(),
                plan_name: request.requested_plan.clone(),
            })
            .await
        {
            Ok(result) => result,
            Err(err) => {
                // Roll the claim back so the request is never left approved
                // with no matching plan change.
                if let Err(reopen_err) = self.requests.reopen(&request.id).await {
                    tracing::error!(
                        request_id = %request.id,
                        error = %reopen_err,
                        "failed to reopen request after plan change failure"
                    );
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            request_id = %request.id,
            clinic_id = %request.clinic_id,
            plan_name = %changed.subscription.plan_name,
            over_doctor_limit = changed.over_doctor_limit,
            "plan-change request approved and applied"
        );

        // 4. Tell the clinic (best effort)
        notify::send_best_effort(
            &self.gateway,
            clinic_channel,
            notify::plan_change_decided(&request, true),
        )
        .await;

        Ok(DecidePlanChangeResult {
            request,
            subscription: Some(changed.subscription),
        })
    }
}
