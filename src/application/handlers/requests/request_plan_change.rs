//! RequestPlanChangeHandler - Command handler for submitting plan-change requests.

use std::sync::Arc;

use crate::application::notify;
use crate::domain::foundation::{ClinicId, ErrorCode, RequestId};
use crate::domain::plan::PlanCatalog;
use crate::domain::request::{PlanChangeRequest, RequestError};
use crate::domain::subscription::SubscriptionError;
use crate::ports::{
    Clock, NotificationChannel, NotificationGateway, PlanChangeRequestRepository,
    SubscriptionRepository,
};

/// Command to submit a plan-change request on behalf of a clinic.
#[derive(Debug, Clone)]
pub struct RequestPlanChangeCommand {
    pub clinic_id: ClinicId,
    pub requested_plan: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlanChangeResult {
    pub request: PlanChangeRequest,
}

/// Handler for submitting plan-change requests.
///
/// The requested plan must exist in the catalog at submission time, so an
/// operator never has to decide on a plan that cannot be applied. The
/// current plan is snapshotted onto the request for the audit trail.
pub struct RequestPlanChangeHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    requests: Arc<dyn PlanChangeRequestRepository>,
    catalog: PlanCatalog,
    gateway: Arc<dyn NotificationGateway>,
    clock: Arc<dyn Clock>,
}

impl RequestPlanChangeHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        requests: Arc<dyn PlanChangeRequestRepository>,
        catalog: PlanCatalog,
        gateway: Arc<dyn NotificationGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscriptions,
            requests,
            catalog,
            gateway,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: RequestPlanChangeCommand,
    ) -> Result<RequestPlanChangeResult, RequestError> {
        // 1. The requested plan must be in the catalog
        if !self.catalog.is_known(&cmd.requested_plan) {
            return Err(RequestError::unknown_plan(cmd.requested_plan));
        }

        // 2. The clinic must have a subscription to change
        let subscription = self
            .subscriptions
            .find_by_clinic_id(&cmd.clinic_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.clinic_id.clone()))?;

        // 3. Build the pending request, snapshotting the current plan
        let request = PlanChangeRequest::submit(
            RequestId::new(),
            cmd.clinic_id.clone(),
            subscription.clinic_name.clone(),
            subscription.plan_name.clone(),
            cmd.requested_plan,
            self.clock.now(),
        )
        .map_err(|err| RequestError::Validation(err.to_string()))?;

        // 4. Store it, enforcing one pending request per clinic
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
            current_plan = %request.current_plan,
            requested_plan = %request.requested_plan,
            "plan-change request submitted"
        );

        // 5. Alert the operator (best effort)
        notify::send_best_effort(
            &self.gateway,
            NotificationChannel::Operator,
            notify::plan_change_requested(&request),
        )
        .await;

        Ok(RequestPlanChangeResult { request })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::{
        InMemoryPlanChangeRequestRepository, InMemorySubscriptionRepository,
    };
    use crate::adapters::notification::InMemoryNotificationGateway;
    use crate::domain::foundation::{CalendarDate, Timestamp};
    use crate::domain::plan::PlanEntry;
    use crate::domain::request::RequestStatus;
    use crate::domain::subscription::Subscription;

    fn clinic_id() -> ClinicId {
        ClinicId::new("najot").unwrap()
    }

    fn catalog() -> PlanCatalog {
        PlanCatalog::new([
            PlanEntry { name: "CRM".into(), doctors_limit: 10 },
            PlanEntry { name: "CRM Premium".into(), doctors_limit: 20 },
        ])
    }

    fn subscription() -> Subscription {
        Subscription::new(
            clinic_id(),
            "Najot Shifo",
            "CRM",
            CalendarDate::from_ymd(2025, 6, 1).unwrap(),
            true,
            10,
            10,
            false,
            Timestamp::now(),
        )
    }

    struct Fixture {
        requests: Arc<InMemoryPlanChangeRequestRepository>,
        gateway: Arc<InMemoryNotificationGateway>,
        handler: RequestPlanChangeHandler,
    }

    fn fixture() -> Fixture {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::with_subscriptions([
            subscription(),
        ]));
        let requests = Arc::new(InMemoryPlanChangeRequestRepository::new());
        let gateway = Arc::new(InMemoryNotificationGateway::new());
        let clock = Arc::new(FixedClock::at("2025-05-20T12:00:00Z"));
        let handler = RequestPlanChangeHandler::new(
            subscriptions,
            requests.clone(),
            catalog(),
            gateway.clone(),
            clock,
        );
        Fixture {
            requests,
            gateway,
            handler,
        }
    }

    #[tokio::test]
    async fn submits_pending_request_with_plan_snapshot() {
        let f = fixture();

        let result = f
            .handler
            .handle(RequestPlanChangeCommand {
                clinic_id: clinic_id(),
                requested_plan: "CRM Premium".into(),
            })
            .await
            .unwrap();

        assert_eq!(result.request.status, RequestStatus::Pending);
        assert_eq!(result.request.current_plan, "CRM");
        assert_eq!(result.request.requested_plan, "CRM Premium");

        let sent = f.gateway.sent_to(&NotificationChannel::Operator);
        assert_eq!(sent.len(), 1);
        assert!(sent[0].message.contains("'CRM Premium'"));
    }

    #[tokio::test]
    async fn unknown_plan_is_rejected_before_any_store_access() {
        let f = fixture();

        let result = f
            .handler
            .handle(RequestPlanChangeCommand {
                clinic_id: clinic_id(),
                requested_plan: "CRM Platinum".into(),
            })
            .await;

        assert_eq!(
            result,
            Err(RequestError::UnknownPlan("CRM Platinum".into()))
        );
        assert!(f.requests.list_by_clinic(&clinic_id()).await.unwrap().is_empty());
        assert_eq!(f.gateway.sent_count(), 0);
    }

    #[tokio::test]
    async fn second_pending_request_is_rejected_as_duplicate() {
        let f = fixture();

        f.handler
            .handle(RequestPlanChangeCommand {
                clinic_id: clinic_id(),
                requested_plan: "CRM Premium".into(),
            })
            .await
            .unwrap();

        let result = f
            .handler
            .handle(RequestPlanChangeCommand {
                clinic_id: clinic_id(),
                requested_plan: "CRM Premium".into(),
            })
            .await;

        assert_eq!(result, Err(RequestError::DuplicateRequest(clinic_id())));
    }

    #[tokio::test]
    async fn fails_when_clinic_has_no_subscription() {
        let f = fixture();
        let other = ClinicId::new("ghost").unwrap();

        let result = f
            .handler
            .handle(RequestPlanChangeCommand {
                clinic_id: other,
                requested_plan: "CRM".into(),
            })
            .await;

        assert!(matches!(
            result,
            Err(RequestError::Subscription(SubscriptionError::NotFound(_)))
        ));
    }
}
