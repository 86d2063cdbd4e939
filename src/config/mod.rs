//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `CLINIC_CONSOLE` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use clinic_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let catalog = config.plans.catalog();
//! ```

mod error;
mod notification;
mod plans;
mod pricing;

pub use error::{ConfigError, ValidationError};
pub use notification::NotificationConfig;
pub use plans::PlansConfig;
pub use pricing::PricingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has workable defaults, so a bare environment yields a
/// valid development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Plan catalog (plan name to doctor seat limit)
    #[serde(default)]
    pub plans: PlansConfig,

    /// Pricing (extension rate, currency)
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Notification channels
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CLINIC_CONSOLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CLINIC_CONSOLE__PRICING__EXTENSION_RATE_MINOR=750000`
    /// - `CLINIC_CONSOLE__NOTIFICATION__OPERATOR_CHANNEL=ops-team`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLINIC_CONSOLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.plans.validate()?;
        self.pricing.validate()?;
        self.notification.validate()?;
        Ok(())
    }
}
