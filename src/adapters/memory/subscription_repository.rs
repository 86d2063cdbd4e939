//! In-memory subscription repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{ClinicId, DomainError, ErrorCode};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

/// In-memory subscription store keyed by clinic id.
#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<HashMap<ClinicId, Subscription>>,
}

impl InMemorySubscriptionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with subscriptions (test helper).
    pub fn with_subscriptions(subscriptions: impl IntoIterator<Item = Subscription>) -> Self {
        Self {
            subscriptions: RwLock::new(
                subscriptions
                    .into_iter()
                    .map(|s| (s.clinic_id.clone(), s))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|_| DomainError::unavailable("subscription store lock poisoned"))?;
        subscriptions.insert(subscription.clinic_id.clone(), subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self
            .subscriptions
            .write()
            .map_err(|_| DomainError::unavailable("subscription store lock poisoned"))?;
        match subscriptions.get_mut(&subscription.clinic_id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::NotFound,
                format!("No subscription for clinic: {}", subscription.clinic_id),
            )),
        }
    }

    async fn find_by_clinic_id(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Option<Subscription>, DomainError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|_| DomainError::unavailable("subscription store lock poisoned"))?;
        Ok(subscriptions.get(clinic_id).cloned())
    }
}
