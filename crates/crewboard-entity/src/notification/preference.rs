//! Notification preference entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::types::id::EmployeeId;

use super::channel::NotificationChannel;

/// Per-employee channel switches. Every channel is on unless turned off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// The employee these preferences belong to.
    pub employee_id: EmployeeId,
    /// Deliver by email.
    #[serde(default = "default_true")]
    pub email: bool,
    /// Deliver by SMS.
    #[serde(default = "default_true")]
    pub sms: bool,
    /// Deliver by push.
    #[serde(default = "default_true")]
    pub push: bool,
    /// Store an in-app notification.
    #[serde(default = "default_true")]
    pub in_app: bool,
    /// When preferences were last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl NotificationPreferences {
    /// Default preferences for an employee: all channels on.
    pub fn default_for(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            email: true,
            sms: true,
            push: true,
            in_app: true,
            updated_at: None,
        }
    }

    /// Check whether `channel` is switched on.
    pub fn allows(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::Push => self.push,
            NotificationChannel::InApp => self.in_app,
        }
    }

    /// External channels that are switched on, in a fixed order.
    pub fn external_channels(&self) -> Vec<NotificationChannel> {
        [
            NotificationChannel::Email,
            NotificationChannel::Sms,
            NotificationChannel::Push,
        ]
        .into_iter()
        .filter(|c| self.allows(*c))
        .collect()
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_allow_every_channel() {
        let prefs = NotificationPreferences::default_for(EmployeeId::new());
        assert!(prefs.allows(NotificationChannel::InApp));
        assert_eq!(prefs.external_channels().len(), 3);
    }

    #[test]
    fn test_missing_fields_default_to_on() {
        let id = EmployeeId::new();
        let prefs: NotificationPreferences =
            serde_json::from_value(serde_json::json!({ "employee_id": id, "sms": false }))
                .expect("partial prefs");
        assert!(prefs.email);
        assert!(!prefs.sms);
        assert_eq!(
            prefs.external_channels(),
            vec![NotificationChannel::Email, NotificationChannel::Push]
        );
    }
}
