//! Pricing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Pricing configuration
///
/// All amounts are in minor currency units (tiyin for UZS).
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Per-month rate charged for manually applied extensions
    #[serde(default = "default_extension_rate")]
    pub extension_rate_minor: i64,

    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_extension_rate() -> i64 {
    500_000
}

fn default_currency() -> String {
    "UZS".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            extension_rate_minor: default_extension_rate(),
            currency: default_currency(),
        }
    }
}

impl PricingConfig {
    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.extension_rate_minor <= 0 {
            return Err(ValidationError::NonPositiveExtensionRate);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrencyCode(self.currency.clone()));
        }
        Ok(())
    }
}
