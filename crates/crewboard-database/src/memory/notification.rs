//! In-memory notification store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crewboard_core::result::AppResult;
use crewboard_core::types::id::{EmployeeId, NotificationId};
use crewboard_entity::notification::{Notification, NotificationPreferences};

use crate::repositories::NotificationStore;

/// Process-local notifications and preferences.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotificationStore {
    notifications: Arc<DashMap<NotificationId, Notification>>,
    preferences: Arc<DashMap<EmployeeId, NotificationPreferences>>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, notification: &Notification) -> AppResult<Notification> {
        self.notifications
            .insert(notification.id, notification.clone());
        Ok(notification.clone())
    }

    async fn find_unread(&self, employee: &EmployeeId) -> AppResult<Vec<Notification>> {
        let mut unread: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|n| n.employee_id == *employee && n.is_unread())
            .map(|n| n.value().clone())
            .collect();
        unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(unread)
    }

    async fn mark_read(&self, id: &NotificationId, employee: &EmployeeId) -> AppResult<bool> {
        match self.notifications.get_mut(id) {
            Some(mut n) if n.employee_id == *employee => {
                n.mark_read();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn get_preferences(
        &self,
        employee: &EmployeeId,
    ) -> AppResult<Option<NotificationPreferences>> {
        Ok(self.preferences.get(employee).map(|p| p.value().clone()))
    }

    async fn upsert_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> AppResult<NotificationPreferences> {
        let mut stored = preferences.clone();
        stored.updated_at = Some(Utc::now());
        self.preferences.insert(stored.employee_id, stored.clone());
        Ok(stored)
    }
}
