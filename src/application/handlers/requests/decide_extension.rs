//! DecideExtensionHandler - Command handler for deciding extension requests.

use std::sync::Arc;

use crate::application::handlers::subscription::{
    ExtendSubscriptionCommand, ExtendSubscriptionHandler,
};
use crate::application::notify;
use crate::domain::foundation::{PaymentId, RequestId};
use crate::domain::payment::PaymentRecord;
use crate::domain::request::{ExtensionRequest, RequestError};
use crate::domain::subscription::Subscription;
use crate::ports::{
    Clock, ExtensionRequestRepository, NotificationChannel, NotificationGateway, PaymentLedger,
    PricingPolicy,
};

/// Command recording the operator's decision on an extension request.
#[derive(Debug, Clone)]
pub struct DecideExtensionCommand {
    pub request_id: RequestId,
    pub approved: bool,
    pub comment: Option<String>,
}

/// Result of a recorded decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecideExtensionResult {
    pub request: ExtensionRequest,
    /// Updated subscription, present only on approval.
    pub subscription: Option<Subscription>,
    /// Ledger record for the applied extension, present only on approval.
    pub payment: Option<PaymentRecord>,
}

/// Handler for deciding extension requests.
///
/// The decision is claimed first with a status-guarded compare-and-set, so
/// two concurrent decisions resolve to exactly one winner. Approval then
/// extends the subscription through the subscription manager and records a
/// manual payment; if the extension cannot be applied the claim is rolled
/// back and the request returns to pending.
pub struct DecideExtensionHandler {
    requests: Arc<dyn ExtensionRequestRepository>,
    extend: Arc<ExtendSubscriptionHandler>,
    ledger: Arc<dyn PaymentLedger>,
    pricing: Arc<dyn PricingPolicy>,
    gateway: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
}

impl DecideExtensionHandler {
    pub fn new(
        requests: Arc<dyn ExtensionRequestRepository>,
        extend: Arc<ExtendSubscriptionHandler>,
        ledger: Arc<dyn PaymentLedger>,
        pricing: Arc<dyn PricingPolicy>,
        gateway: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            requests,
            extend,
            ledger,
            pricing,
            gateway,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: DecideExtensionCommand,
    ) -> Result<DecideExtensionResult, RequestError> {
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

        if !cmd.approved {
            tracing::info!(
                request_id = %request.id,
                clinic_id = %request.clinic_id,
                "extension request rejected"
            );
            notify::send_best_effort(
                &self.gateway,
                NotificationChannel::Operator,
                notify::extension_decided(&request, false),
            )
            .await;
            return Ok(DecideExtensionResult {
                request,
                subscription: None,
                payment: None,
            });
        }

        // 3. Apply the approval through the subscription manager
        let extended = match self
            .extend
            .handle(ExtendSubscriptionCommand {
                clinic_id: request.clinic_id.clone(),
                months: request.requested_months as i32,
            })
            .await
        {
            Ok(result) => result,
            Err(err) => {
                // Roll the claim back so the request is never left approved
                // with no matching subscription change.
                if let Err(reopen_err) = self.requests.reopen(&request.id).await {
                    tracing::error!(
                        request_id = %request.id,
                        error = %reopen_err,
                        "failed to reopen request after extension failure"
                    );
                }
                return Err(err.into());
            }
        };

        // 4. Record the manually applied payment
        let amount_minor = self
            .pricing
            .extension_amount(&extended.subscription.plan_name, request.requested_months);
        let payment = PaymentRecord::manual_extension(
            PaymentId::new(),
            request.clinic_id.clone(),
            request.clinic_name.clone(),
            extended.subscription.plan_name.clone(),
            amount_minor,
            now,
        );
        if let Err(err) = self.ledger.append(&payment).await {
            // The approval and extension stand; only the ledger entry is
            // missing and must be reconciled by hand.
            tracing::error!(
                request_id = %request.id,
                clinic_id = %request.clinic_id,
                error = %err,
                "payment ledger append failed after approved extension"
            );
            return Err(err.into());
        }

        tracing::info!(
            request_id = %request.id,
            clinic_id = %request.clinic_id,
            months = request.requested_months,
            amount_minor,
            "extension request approved and applied"
        );

        // 5. Report the outcome (best effort)
        notify::send_best_effort(
            &self.gateway,
            NotificationChannel::Operator,
            notify::extension_decided(&request, true),
        )
        .await;

        Ok(DecideExtensionResult {
            request,
            subscription: Some(extended.subscription),
            payment: Some(payment),
        })
    }
}
