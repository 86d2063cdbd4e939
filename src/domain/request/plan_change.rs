//! Plan-change request aggregate.
//!
//! A clinic's ask to move to a different plan, requiring operator approval.
//! At most one pending plan-change request may exist per clinic; the
//! request repository enforces the uniqueness atomically.

use crate::domain::foundation::{
    ClinicId, DomainError, ErrorCode, RequestId, StateMachine, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::RequestStatus;

/// A clinic's request to change its subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanChangeRequest {
    /// Unique identifier for this request.
    pub id: RequestId,

    /// Requesting clinic.
    pub clinic_id: ClinicId,

    /// Clinic display name at submission time.
    pub clinic_name: String,

    /// Plan the clinic is on at submission time.
    pub current_plan: String,

    /// Plan the clinic wants to move to.
    pub requested_plan: String,

    /// When the request was submitted.
    pub requested_at: Timestamp,

    /// Current position in the approval lifecycle.
    pub status: RequestStatus,

    /// Operator note, set on decision.
    pub admin_comment: Option<String>,

    /// When the request was decided, if it has been.
    pub decided_at: Option<Timestamp>,
}

impl PlanChangeRequest {
    /// Submits a new pending plan-change request.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if either plan name is empty.
    pub fn submit(
        id: RequestId,
        clinic_id: ClinicId,
        clinic_name: impl Into<String>,
        current_plan: impl Into<String>,
        requested_plan: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let current_plan = current_plan.into();
        let requested_plan = requested_plan.into();
        if current_plan.trim().is_empty() {
            return Err(ValidationError::empty_field("current_plan"));
        }
        if requested_plan.trim().is_empty() {
            return Err(ValidationError::empty_field("requested_plan"));
        }
        Ok(Self {
            id,
            clinic_id,
            clinic_name: clinic_name.into(),
            current_plan,
            requested_plan,
            requested_at: now,
            status: RequestStatus::Pending,
            admin_comment: None,
            decided_at: None,
        })
    }

    /// Records the operator's decision.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the request is not pending.
    pub fn decide(
        &mut self,
        approved: bool,
        comment: Option<String>,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        let target = if approved {
            RequestStatus::Approved
        } else {
            RequestStatus::Rejected
        };
        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidState,
                format!("Request {} has already been decided", self.id),
            )
        })?;
        self.admin_comment = comment;
        self.decided_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit() -> PlanChangeRequest {
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
    fn submit_creates_pending_request() {
        let req = submit();
        assert_eq!(req.status, RequestStatus::Pending);
        assert_eq!(req.current_plan, "CRM");
        assert_eq!(req.requested_plan, "CRM Premium");
        assert!(req.admin_comment.is_none());
    }

    #[test]
    fn submit_rejects_empty_plan_names() {
        let result = PlanChangeRequest::submit(
            RequestId::new(),
            ClinicId::new("najot").unwrap(),
            "Najot Shifo",
            "",
            "CRM Premium",
            Timestamp::now(),
        );
        assert!(result.is_err());

        let result = PlanChangeRequest::submit(
            RequestId::new(),
            ClinicId::new("najot").unwrap(),
            "Najot Shifo",
            "CRM",
            "  ",
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn reject_records_comment() {
        let mut req = submit();
        req.decide(false, Some("budget constraints".into()), Timestamp::now())
            .unwrap();

        assert_eq!(req.status, RequestStatus::Rejected);
        assert_eq!(req.admin_comment.as_deref(), Some("budget constraints"));
    }

    #[test]
    fn second_decision_fails_with_invalid_state() {
        let mut req = submit();
        req.decide(true, None, Timestamp::now()).unwrap();

        let err = req.decide(false, None, Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert_eq!(req.status, RequestStatus::Approved);
    }
}
