//! Subscription repository port.
//!
//! Defines the contract for persisting and retrieving Subscription
//! aggregates. Subscriptions are created at clinic onboarding and then
//! mutated only through the subscription handlers.
//!
//! # Design
//!
//! - **One per clinic**: `clinic_id` is the primary key
//! - **No deletes**: A clinic's subscription lives as long as the tenant
//! - **Transactional writes**: `update` either fully happens or fully does
//!   not; a timeout surfaces as `Unavailable` with state unchanged

use crate::domain::foundation::{ClinicId, DomainError};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Repository port for Subscription aggregate persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Save a subscription created at onboarding.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Update an existing subscription.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no subscription exists for the clinic
    /// - `Unavailable` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find the subscription for a clinic.
    ///
    /// Returns `None` if the clinic has no subscription.
    async fn find_by_clinic_id(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Option<Subscription>, DomainError>;
}
