//! Notification configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Notification configuration
///
/// Names the operator channel and controls whether dispatch is enabled at
/// all (useful in development environments without a transport).
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Identifier of the platform operator's channel
    #[serde(default = "default_operator_channel")]
    pub operator_channel: String,

    /// Whether notifications are dispatched at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_operator_channel() -> String {
    "operator".to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            operator_channel: default_operator_channel(),
            enabled: default_enabled(),
        }
    }
}

impl NotificationConfig {
    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.operator_channel.trim().is_empty() {
            return Err(ValidationError::EmptyOperatorChannel);
        }
        Ok(())
    }
}
