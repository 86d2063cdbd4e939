//! Structured-log notification gateway.

use async_trait::async_trait;

use crate::config::NotificationConfig;
use crate::domain::foundation::DomainError;
use crate::ports::{NotificationChannel, NotificationGateway};

/// Gateway that emits each notification as a structured log line.
///
/// Stands in for the external delivery transport when none is wired. The
/// operator channel id comes from [`NotificationConfig`]; when dispatch is
/// disabled there, `send` is a no-op.
#[derive(Debug, Clone)]
pub struct TracingNotificationGateway {
    operator_channel: String,
    enabled: bool,
}

impl TracingNotificationGateway {
    pub fn new() -> Self {
        Self::from_config(&NotificationConfig::default())
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Self {
            operator_channel: config.operator_channel.clone(),
            enabled: config.enabled,
        }
    }

    fn recipient(&self, channel: &NotificationChannel) -> String {
        match channel {
            NotificationChannel::Operator => self.operator_channel.clone(),
            NotificationChannel::Clinic(clinic_id) => format!("clinic:{}", clinic_id),
        }
    }
}

impl Default for TracingNotificationGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationGateway for TracingNotificationGateway {
    async fn send(
        &self,
        channel: &NotificationChannel,
        message: &str,
    ) -> Result<(), DomainError> {
        if !self.enabled {
            return Ok(());
        }
        tracing::info!(
            channel = %channel,
            recipient = %self.recipient(channel),
            message,
            "notification dispatched"
        );
        Ok(())
    }
}
