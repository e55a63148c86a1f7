//! Notification delivery configuration.

use serde::{Deserialize, Serialize};

/// Settings for in-app storage and external multi-channel delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether in-app notifications are stored at all.
    #[serde(default = "default_true")]
    pub in_app_enabled: bool,
    /// Endpoint of the external delivery function (email/SMS/push).
    ///
    /// When unset, deliveries are only logged.
    #[serde(default)]
    pub delivery_url: Option<String>,
    /// Timeout for a single delivery request, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            in_app_enabled: true,
            delivery_url: None,
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    10
}
