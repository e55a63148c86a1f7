//! Notification delivery channels.

use serde::{Deserialize, Serialize};

/// A channel through which an employee can be told about an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    /// Email delivered by the external function.
    Email,
    /// Text message delivered by the external function.
    Sms,
    /// Mobile/web push delivered by the external function.
    Push,
    /// Stored notification shown in the app's notification bell.
    InApp,
}

impl NotificationChannel {
    /// Return the channel as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
            Self::InApp => "in_app",
        }
    }

    /// Whether delivery is handled outside this service.
    pub fn is_external(&self) -> bool {
        !matches!(self, Self::InApp)
    }
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
