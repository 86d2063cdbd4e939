//! Subscription-specific error types.

use crate::domain::foundation::{ClinicId, DomainError, ErrorCode};

/// Errors from subscription manager operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// No subscription exists for this clinic.
    NotFound(ClinicId),

    /// Extension months must be positive.
    InvalidMonths(i32),

    /// Plan name not present in the catalog.
    UnknownPlan(String),

    /// Transient store failure; the operation may be retried.
    Unavailable(String),
}

impl SubscriptionError {
    pub fn not_found(clinic_id: ClinicId) -> Self {
        SubscriptionError::NotFound(clinic_id)
    }

    pub fn invalid_months(months: i32) -> Self {
        SubscriptionError::InvalidMonths(months)
    }

    pub fn unknown_plan(plan: impl Into<String>) -> Self {
        SubscriptionError::UnknownPlan(plan.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        SubscriptionError::Unavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::NotFound(_) => ErrorCode::NotFound,
            SubscriptionError::InvalidMonths(_) => ErrorCode::InvalidArgument,
            SubscriptionError::UnknownPlan(_) => ErrorCode::UnknownPlan,
            SubscriptionError::Unavailable(_) => ErrorCode::Unavailable,
        }
    }

    /// Returns a language-neutral error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::NotFound(clinic_id) => {
                format!("No subscription found for clinic: {}", clinic_id)
            }
            SubscriptionError::InvalidMonths(months) => {
                format!("Extension months must be positive, got {}", months)
            }
            SubscriptionError::UnknownPlan(plan) => format!("Unknown plan: {}", plan),
            SubscriptionError::Unavailable(msg) => format!("Store unavailable: {}", msg),
        }
    }

    /// Returns true if the caller may retry the failed operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubscriptionError::Unavailable(_))
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unavailable => SubscriptionError::Unavailable(err.message),
            _ => SubscriptionError::Unavailable(err.to_string()),
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
