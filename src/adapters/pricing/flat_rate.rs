//! Flat per-month pricing.

use crate::config::PricingConfig;
use crate::ports::PricingPolicy;

/// Charges the same per-month rate for every plan.
///
/// The rate comes from configuration, keeping pricing policy out of the
/// workflow engine.
#[derive(Debug, Clone)]
pub struct FlatRatePricing {
    rate_per_month_minor: i64,
}

impl FlatRatePricing {
    /// Creates a policy with the given per-month rate in minor units.
    pub fn new(rate_per_month_minor: i64) -> Self {
        Self { rate_per_month_minor }
    }

    /// Creates a policy from the pricing configuration section.
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.extension_rate_minor)
    }
}

impl PricingPolicy for FlatRatePricing {
    fn extension_amount(&self, _plan_name: &str, months: u32) -> i64 {
        self.rate_per_month_minor * months as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_rate_times_months() {
        let pricing = FlatRatePricing::new(500_000);
        assert_eq!(pricing.extension_amount("CRM", 3), 1_500_000);
        assert_eq!(pricing.extension_amount("CRM Premium", 1), 500_000);
    }

    #[test]
    fn rate_is_plan_independent() {
        let pricing = FlatRatePricing::new(500_000);
        assert_eq!(
            pricing.extension_amount("CRM Basic", 6),
            pricing.extension_amount("CRM Premium", 6)
        );
    }

    #[test]
    fn from_config_uses_configured_rate() {
        let config = PricingConfig {
            extension_rate_minor: 750_000,
            ..Default::default()
        };
        let pricing = FlatRatePricing::from_config(&config);
        assert_eq!(pricing.extension_amount("CRM", 2), 1_500_000);
    }
}
