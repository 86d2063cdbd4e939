//! Pricing policy adapters.

mod flat_rate;

pub use flat_rate::FlatRatePricing;
