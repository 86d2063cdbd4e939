//! Notification gateway port.
//!
//! Delivers a formatted message to a named recipient channel. Delivery is
//! best-effort from the workflow's perspective: the handlers dispatch only
//! after the authoritative state change is committed, and a gateway failure
//! is logged and swallowed, never surfaced to the caller.

use crate::domain::foundation::{ClinicId, DomainError};
use async_trait::async_trait;

/// Recipient channel for a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    /// The platform operator's channel.
    Operator,
    /// A specific clinic's channel.
    Clinic(ClinicId),
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationChannel::Operator => write!(f, "operator"),
            NotificationChannel::Clinic(clinic_id) => write!(f, "clinic:{}", clinic_id),
        }
    }
}

/// Sends a message to a recipient channel.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Deliver a message to the channel.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on delivery failure; callers in the workflow log and
    ///   swallow this
    async fn send(
        &self,
        channel: &NotificationChannel,
        message: &str,
    ) -> Result<(), DomainError>;
}
