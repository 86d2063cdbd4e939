//! RequestExtensionHandler - Command handler for submitting extension requests.

use std::sync::Arc;

use crate::application::notify;
use crate::domain::foundation::{ClinicId, ErrorCode, RequestId};
use crate::domain::request::{ExtensionRequest, RequestError};
use crate::domain::subscription::SubscriptionError;
use crate::ports::{
    Clock, ExtensionRequestRepository, NotificationChannel, NotificationGateway,
    SubscriptionRepository,
};

/// Command to submit an extension request on behalf of a clinic.
#[derive(Debug, Clone)]
pub struct RequestExtensionCommand {
    pub clinic_id: ClinicId,
    pub months: u32,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestExtensionResult {
    pub request: ExtensionRequest,
}

/// Handler for submitting extension requests.
///
/// At most one pending extension request may exist per clinic; the request
/// repository enforces the uniqueness atomically. The operator is alerted
/// after the request is stored, on a best-effort basis.
pub struct RequestExtensionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    requests: Arc<dyn ExtensionRequestRepository>,
    gateway: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
}

impl RequestExtensionHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        requests: Arc<dyn ExtensionRequestRepository>,
        gateway: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscriptions,
            requests,
            gateway,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestExtensionCommand,
    ) -> Result<RequestExtensionResult, RequestError> {
        // 1. The clinic must have a subscription to extend
        let subscription = self
            .subscriptions
            .find_by_clinic_id(&cmd.clinic_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.clinic_id.clone()))?;

        // 2. Build the pending request (validates the month range)
        let request = ExtensionRequest::submit(
            RequestId::new(),
            cmd.clinic_id.clone(),
            subscription.clinic_name.clone(),
            cmd.months,
            self.clock.now(),
        )
        .map_err(|_| RequestError::invalid_months(cmd.months))?;

        // 3. Store it, enforcing one pending request per clinic
        self.requests.insert_pending(&request).await.map_err(|err| {
            if err.code == ErrorCode::DuplicateRequest {
                RequestError::duplicate_request(cmd.clinic_id.clone())
            } else {
                err.into()
            }
        })?;

        tracing::info!(
            request_id = %request.id,
            clinic_id = %request.clinic_id,
            months = request.requested_months,
            "extension request submitted"
        );

        // 4. Alert the operator (best effort)
        notify::send_best_effort(
            &self.gateway,
            NotificationChannel::Operator,
            notify::extension_requested(&request),
        )
        .await;

        Ok(RequestExtensionResult { request })
    }
}
