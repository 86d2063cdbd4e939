//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Plan catalog must contain at least one plan")]
    EmptyPlanCatalog,

    #[error("Duplicate plan name in catalog: {0}")]
    DuplicatePlanName(String),

    #[error("Plan '{0}' must allow at least one doctor seat")]
    ZeroDoctorLimit(String),

    #[error("Extension rate must be positive")]
    NonPositiveExtensionRate,

    #[error("Currency code must be a 3-letter ISO code, got '{0}'")]
    InvalidCurrencyCode(String),

    #[error("Operator channel id cannot be empty")]
    EmptyOperatorChannel,
}
