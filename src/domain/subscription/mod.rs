//! Subscription domain module.
//!
//! Each clinic has exactly one Subscription, created at onboarding and
//! mutated for the clinic's whole lifetime. All mutation flows through the
//! subscription handlers; clinic-side code only creates requests.

mod aggregate;
mod errors;

pub use aggregate::Subscription;
pub use errors::SubscriptionError;
