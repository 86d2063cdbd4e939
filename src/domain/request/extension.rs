//! Extension request aggregate.
//!
//! A clinic's ask to push its subscription expiry back by N months,
//! requiring operator approval.

use crate::domain::foundation::{
    ClinicId, DomainError, ErrorCode, RequestId, StateMachine, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::RequestStatus;

/// Minimum extension a clinic may request, in months.
pub const MIN_EXTENSION_MONTHS: u32 = 1;
/// Maximum extension a clinic may request, in months.
pub const MAX_EXTENSION_MONTHS: u32 = 12;

/// A clinic's request to extend its subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    /// Unique identifier for this request.
    pub id: RequestId,

    /// Requesting clinic.
    pub clinic_id: ClinicId,

    /// Clinic display name at submission time.
    pub clinic_name: String,

    /// Number of months requested, within [1, 12].
    pub requested_months: u32,

    /// When the request was submitted.
    pub requested_at: Timestamp,

    /// Current position in the approval lifecycle.
    pub status: RequestStatus,

    /// Operator note, set on decision.
    pub admin_comment: Option<String>,

    /// When the request was decided, if it has been.
    pub decided_at: Option<Timestamp>,
}

impl ExtensionRequest {
    /// Submits a new pending extension request.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `requested_months` is outside [1, 12].
    pub fn submit(
        id: RequestId,
        clinic_id: ClinicId,
        clinic_name: impl Into<String>,
        requested_months: u32,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        if !(MIN_EXTENSION_MONTHS..=MAX_EXTENSION_MONTHS).contains(&requested_months) {
            return Err(ValidationError::out_of_range(
                "requested_months",
                MIN_EXTENSION_MONTHS as i64,
                MAX_EXTENSION_MONTHS as i64,
                requested_months as i64,
            ));
        }
        Ok(Self {
            id,
            clinic_id,
            clinic_name: clinic_name.into(),
            requested_months,
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
