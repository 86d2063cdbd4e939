//! Subscription aggregate entity.
//!
//! # Invariants
//!
//! - One subscription per clinic (unique `clinic_id`).
//! - `doctors_limit` reflects the catalog limit for `plan_name` as of the
//!   last successful plan change; it is never re-derived behind the
//!   caller's back.
//! - `expiry_date` only moves through calendar-month extension.

use crate::domain::foundation::{
    CalendarDate, ClinicId, DomainError, ErrorCode, Timestamp,
};
use serde::{Deserialize, Serialize};

/// Subscription aggregate - one per clinic tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Stable clinic identifier.
    pub clinic_id: ClinicId,

    /// Clinic display name.
    pub clinic_name: String,

    /// Current plan; must exist in the plan catalog.
    pub plan_name: String,

    /// Calendar date the subscription expires, no time component.
    pub expiry_date: CalendarDate,

    /// Whether the subscription renews automatically.
    pub auto_renewal: bool,

    /// Doctor seats currently in use.
    pub doctors_used: u32,

    /// Doctor seat limit, derived from the plan at the last plan change.
    pub doctors_limit: u32,

    /// Whether the clinic is on a trial.
    pub trial_active: bool,

    /// When the subscription was last updated.
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Creates a subscription as produced by clinic onboarding.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clinic_id: ClinicId,
        clinic_name: impl Into<String>,
        plan_name: impl Into<String>,
        expiry_date: CalendarDate,
        auto_renewal: bool,
        doctors_used: u32,
        doctors_limit: u32,
        trial_active: bool,
        now: Timestamp,
    ) -> Self {
        Self {
            clinic_id,
            clinic_name: clinic_name.into(),
            plan_name: plan_name.into(),
            expiry_date,
            auto_renewal,
            doctors_used,
            doctors_limit,
            trial_active,
            updated_at: now,
        }
    }

    /// Extends the expiry date by the given number of calendar months.
    ///
    /// Day-of-month is preserved where the target month has that day,
    /// otherwise clamped to the target month's last day.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `months` is not positive. The
    /// subscription is left unchanged on error.
    pub fn extend(&mut self, months: i32, now: Timestamp) -> Result<(), DomainError> {
        if months <= 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidArgument,
                format!("Extension months must be positive, got {}", months),
            ));
        }
        self.expiry_date = self.expiry_date.add_months(months as u32);
        self.updated_at = now;
        Ok(())
    }

    /// Moves the subscription to a new plan with the given seat limit.
    ///
    /// The caller resolves `doctors_limit` from the plan catalog. The method
    /// never reduces `doctors_used`: a downgrade can leave the clinic over
    /// its limit, which is flagged for display elsewhere rather than
    /// silently truncated.
    pub fn change_plan(
        &mut self,
        plan_name: impl Into<String>,
        doctors_limit: u32,
        now: Timestamp,
    ) {
        self.plan_name = plan_name.into();
        self.doctors_limit = doctors_limit;
        self.updated_at = now;
    }

    /// Flips the auto-renewal flag, returning the new value.
    pub fn toggle_auto_renewal(&mut self, now: Timestamp) -> bool {
        self.auto_renewal = !self.auto_renewal;
        self.updated_at = now;
        self.auto_renewal
    }

    /// Returns true if more doctor seats are in use than the plan allows.
    pub fn is_over_doctor_limit(&self) -> bool {
        self.doctors_used > self.doctors_limit
    }

    /// Returns true if the subscription has expired as of the given date.
    pub fn is_expired(&self, today: CalendarDate) -> bool {
        self.expiry_date.is_before(&today)
    }
}
