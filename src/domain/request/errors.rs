//! Request workflow error types.
//!
//! Errors from creating and deciding extension and plan-change requests.
//! All variants except `Unavailable` are terminal business errors, returned
//! to the caller unchanged and never retried automatically.

use crate::domain::foundation::{ClinicId, DomainError, ErrorCode, RequestId};
use crate::domain::subscription::SubscriptionError;

use super::RequestStatus;

/// Errors from the request workflow engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No request with this id exists.
    NotFound(RequestId),

    /// Requested months outside the allowed range.
    InvalidMonths(u32),

    /// A pending request of the same kind already exists for the clinic.
    DuplicateRequest(ClinicId),

    /// Decision attempted on a request that is no longer pending.
    InvalidState { current: RequestStatus },

    /// Requested plan not present in the catalog.
    UnknownPlan(String),

    /// Submitted request failed value validation.
    Validation(String),

    /// Applying an approved decision to the subscription failed.
    Subscription(SubscriptionError),

    /// Terminal store error surfaced with its original code.
    ///
    /// Catch-all for store errors that carry a business meaning of their
    /// own (`NotFound`, `InvalidState`, ...) and must keep their code
    /// instead of being mislabeled as retryable.
    Store { code: ErrorCode, message: String },

    /// Transient store failure; the operation may be retried.
    Unavailable(String),
}

impl RequestError {
    pub fn not_found(id: RequestId) -> Self {
        RequestError::NotFound(id)
    }

    pub fn invalid_months(months: u32) -> Self {
        RequestError::InvalidMonths(months)
    }

    pub fn duplicate_request(clinic_id: ClinicId) -> Self {
        RequestError::DuplicateRequest(clinic_id)
    }

    pub fn invalid_state(current: RequestStatus) -> Self {
        RequestError::InvalidState { current }
    }

    pub fn unknown_plan(plan: impl Into<String>) -> Self {
        RequestError::UnknownPlan(plan.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        RequestError::Unavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RequestError::NotFound(_) => ErrorCode::NotFound,
            RequestError::InvalidMonths(_) => ErrorCode::InvalidArgument,
            RequestError::DuplicateRequest(_) => ErrorCode::DuplicateRequest,
            RequestError::InvalidState { .. } => ErrorCode::InvalidState,
            RequestError::UnknownPlan(_) => ErrorCode::UnknownPlan,
            RequestError::Validation(_) => ErrorCode::ValidationFailed,
            RequestError::Subscription(inner) => inner.code(),
            RequestError::Store { code, .. } => *code,
            RequestError::Unavailable(_) => ErrorCode::Unavailable,
        }
    }

    /// Returns a language-neutral error message.
    pub fn message(&self) -> String {
        match self {
            RequestError::NotFound(id) => format!("Request not found: {}", id),
            RequestError::InvalidMonths(months) => {
                format!("Requested months must be within 1-12, got {}", months)
            }
            RequestError::DuplicateRequest(clinic_id) => {
                format!("Clinic {} already has a pending request", clinic_id)
            }
            RequestError::InvalidState { current } => {
                format!("Request has already been decided ({:?})", current)
            }
            RequestError::UnknownPlan(plan) => format!("Unknown plan: {}", plan),
            RequestError::Validation(msg) => msg.clone(),
            RequestError::Subscription(inner) => inner.message(),
            RequestError::Store { message, .. } => message.clone(),
            RequestError::Unavailable(msg) => format!("Store unavailable: {}", msg),
        }
    }

    /// Returns true if the caller may retry the failed operation.
    pub fn is_retryable(&self) -> bool {
        match self {
            RequestError::Unavailable(_) => true,
            RequestError::Subscription(inner) => inner.is_retryable(),
            _ => false,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RequestError {}

impl From<SubscriptionError> for RequestError {
    fn from(err: SubscriptionError) -> Self {
        RequestError::Subscription(err)
    }
}

impl From<DomainError> for RequestError {
    fn from(err: DomainError) -> Self {
        match err.code {
            // Only Unavailable is retryable. Every other store error keeps
            // its own code so a terminal business error never reads as
            // transient.
            ErrorCode::Unavailable => RequestError::Unavailable(err.message),
            code => RequestError::Store {
                code,
                message: err.message,
            },
        }
    }
}
