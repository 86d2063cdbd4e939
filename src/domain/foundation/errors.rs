//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes for the subscription workflow.
///
/// Business errors (`NotFound` through `InvalidState`) are terminal and must
/// be returned to the caller unchanged. `Unavailable` marks transient
/// infrastructure failures the caller may retry at its own discretion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unknown clinic or request id.
    NotFound,
    /// Malformed input (months out of range, empty identifier).
    InvalidArgument,
    /// Plan name not present in the catalog.
    UnknownPlan,
    /// A pending request of the same kind already exists for the clinic.
    DuplicateRequest,
    /// Decision attempted on a request that is no longer pending.
    InvalidState,
    /// Value object construction failed.
    ValidationFailed,
    /// Transient store or gateway failure.
    Unavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::UnknownPlan => "UNKNOWN_PLAN",
            ErrorCode::DuplicateRequest => "DUPLICATE_REQUEST",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Unavailable => "UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// Repository and gateway ports speak `DomainError`; the application layer
/// maps it into the operation-specific error enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates an `Unavailable` error for a transient infrastructure failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unavailable, message)
    }

    /// Creates a `NotFound` error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Returns true if the caller may retry the failed operation.
    pub fn is_retryable(&self) -> bool {
        self.code == ErrorCode::Unavailable
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("clinic_id");
        assert_eq!(format!("{}", err), "Field 'clinic_id' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("months", 1, 12, 15);
        assert_eq!(
            format!("{}", err),
            "Field 'months' must be between 1 and 12, got 15"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NotFound, "Clinic not found");
        assert_eq!(format!("{}", err), "[NOT_FOUND] Clinic not found");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DuplicateRequest), "DUPLICATE_REQUEST");
        assert_eq!(format!("{}", ErrorCode::Unavailable), "UNAVAILABLE");
    }

    #[test]
    fn only_unavailable_is_retryable() {
        assert!(DomainError::unavailable("store timeout").is_retryable());
        assert!(!DomainError::not_found("missing").is_retryable());
        assert!(!DomainError::new(ErrorCode::InvalidState, "decided").is_retryable());
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("clinic_id").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("clinic_id"));
    }
}
