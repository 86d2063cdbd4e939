//! Notification formatting and best-effort dispatch.
//!
//! Messages are formatted here so the handlers stay focused on state
//! transitions. Dispatch happens only after the authoritative state change
//! is committed, and a gateway failure is logged and swallowed: it must
//! never turn a committed decision into an error.

use std::sync::Arc;

use crate::domain::request::{ExtensionRequest, PlanChangeRequest};
use crate::ports::{NotificationChannel, NotificationGateway};

/// Message to the operator channel when a clinic asks for an extension.
pub fn extension_requested(request: &ExtensionRequest) -> String {
    format!(
        "Extension request: {} ({}) asks for {} month(s). Request id: {}",
        request.clinic_name, request.clinic_id, request.requested_months, request.id
    )
}

/// Message to the operator channel when a clinic asks for a plan change.
pub fn plan_change_requested(request: &PlanChangeRequest) -> String {
    format!(
        "Plan change request: {} ({}) asks to move from '{}' to '{}'. Request id: {}",
        request.clinic_name,
        request.clinic_id,
        request.current_plan,
        request.requested_plan,
        request.id
    )
}

/// Outcome summary for a decided extension request.
pub fn extension_decided(request: &ExtensionRequest, approved: bool) -> String {
    let outcome = if approved {
        format!("approved, subscription extended by {} month(s)", request.requested_months)
    } else {
        "rejected".to_string()
    };
    match &request.admin_comment {
        Some(comment) => format!(
            "Extension request for {} {}: {}",
            request.clinic_name, outcome, comment
        ),
        None => format!("Extension request for {} {}", request.clinic_name, outcome),
    }
}

/// Clinic-facing outcome message for a decided plan-change request.
pub fn plan_change_decided(request: &PlanChangeRequest, approved: bool) -> String {
    let outcome = if approved {
        format!("approved, your clinic is now on '{}'", request.requested_plan)
    } else {
        format!("rejected, your clinic stays on '{}'", request.current_plan)
    };
    match &request.admin_comment {
        Some(comment) => format!("Plan change {}: {}", outcome, comment),
        None => format!("Plan change {}", outcome),
    }
}

/// Sends a notification, logging and swallowing any failure.
pub async fn send_best_effort(
    gateway: &Arc<dyn NotificationGateway>,
    channel: NotificationChannel,
    message: String,
) {
    if let Err(err) = gateway.send(&channel, &message).await {
        tracing::warn!(
            channel = %channel,
            error = %err,
            "notification delivery failed, continuing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notification::InMemoryNotificationGateway;
    use crate::domain::foundation::{ClinicId, RequestId, Timestamp};

    fn extension_request() -> ExtensionRequest {
        ExtensionRequest::submit(
            RequestId::new(),
            ClinicId::new("najot").unwrap(),
            "Najot Shifo",
            3,
            Timestamp::now(),
        )
        .unwrap()
    }

    fn plan_change_request() -> PlanChangeRequest {
        PlanChangeRequest::submit(
            RequestId::new(),
            ClinicId::new("najot").unwrap(),
            "Najot Shifo",
            "CRM",
            "CRM Premium",
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn extension_requested_names_clinic_and_months() {
        let msg = extension_requested(&extension_request());
        assert!(msg.contains("Najot Shifo"));
        assert!(msg.contains("3 month(s)"));
    }

    #[test]
    fn plan_change_requested_names_both_plans() {
        let msg = plan_change_requested(&plan_change_request());
        assert!(msg.contains("'CRM'"));
        assert!(msg.contains("'CRM Premium'"));
    }

    #[test]
    fn extension_decided_includes_comment() {
        let mut req = extension_request();
        req.decide(true, Some("ok".into()), Timestamp::now()).unwrap();
        let msg = extension_decided(&req, true);
        assert!(msg.contains("approved"));
        assert!(msg.contains("ok"));
    }

    #[test]
    fn plan_change_rejection_includes_reason_and_current_plan() {
        let mut req = plan_change_request();
        req.decide(false, Some("budget constraints".into()), Timestamp::now())
            .unwrap();
        let msg = plan_change_decided(&req, false);
        assert!(msg.contains("rejected"));
        assert!(msg.contains("'CRM'"));
        assert!(msg.contains("budget constraints"));
    }

    #[tokio::test]
    async fn send_best_effort_swallows_gateway_failure() {
        let gateway: Arc<dyn NotificationGateway> =
            Arc::new(InMemoryNotificationGateway::failing());
        // Must not panic or propagate.
        send_best_effort(&gateway, NotificationChannel::Operator, "x".into()).await;
    }

    #[tokio::test]
    async fn send_best_effort_delivers_when_gateway_works() {
        let gateway = Arc::new(InMemoryNotificationGateway::new());
        let as_port: Arc<dyn NotificationGateway> = gateway.clone();
        send_best_effort(&as_port, NotificationChannel::Operator, "hello".into()).await;
        assert_eq!(gateway.sent_count(), 1);
    }
}
