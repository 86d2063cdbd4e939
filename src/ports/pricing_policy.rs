//! Pricing policy port.
//!
//! Pricing is policy, not workflow: the engine asks this port what an
//! approved extension costs instead of hardcoding a per-month rate.

/// Computes the amount charged for subscription operations.
pub trait PricingPolicy: Send + Sync {
    /// Amount in minor currency units for extending the given plan by
    /// `months` months.
    fn extension_amount(&self, plan_name: &str, months: u32) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_policy_is_object_safe() {
        fn _accepts_dyn(_policy: &dyn PricingPolicy) {}
    }
}
