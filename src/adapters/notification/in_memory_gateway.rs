//! Recording notification gateway for tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{NotificationChannel, NotificationGateway};

/// A captured notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub channel: NotificationChannel,
    pub message: String,
}

/// Gateway that records every send for assertions.
///
/// Can be configured to fail, which the workflow handlers must log and
/// swallow once the authoritative state change is committed.
#[derive(Default)]
pub struct InMemoryNotificationGateway {
    sent: RwLock<Vec<SentNotification>>,
    fail_sends: bool,
}

impl InMemoryNotificationGateway {
    /// Creates a gateway that delivers successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway whose every send fails with `Unavailable`.
    pub fn failing() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            fail_sends: true,
        }
    }

    /// Returns all captured notifications in send order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn sent_notifications(&self) -> Vec<SentNotification> {
        self.sent
            .read()
            .expect("InMemoryNotificationGateway: lock poisoned")
            .clone()
    }

    /// Returns the number of captured notifications.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn sent_count(&self) -> usize {
        self.sent
            .read()
            .expect("InMemoryNotificationGateway: lock poisoned")
            .len()
    }

    /// Returns notifications sent to a specific channel.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn sent_to(&self, channel: &NotificationChannel) -> Vec<SentNotification> {
        self.sent_notifications()
            .into_iter()
            .filter(|n| &n.channel == channel)
            .collect()
    }
}

#[async_trait]
impl NotificationGateway for InMemoryNotificationGateway {
    async fn send(
        &self,
        channel: &NotificationChannel,
        message: &str,
    ) -> Result<(), DomainError> {
        if self.fail_sends {
            return Err(DomainError::unavailable("notification transport down"));
        }
        self.sent
            .write()
            .map_err(|_| DomainError::unavailable("notification gateway lock poisoned"))?
            .push(SentNotification {
                channel: channel.clone(),
                message: message.to_string(),
            });
        Ok(())
    }
}
