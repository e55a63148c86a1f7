//! In-app notifications, channel preferences and delivery hand-off.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crewboard_core::error::AppError;
use crewboard_core::events::AssignmentEvent;
use crewboard_core::result::AppResult;
use crewboard_core::types::id::{EmployeeId, NotificationId};
use crewboard_database::NotificationStore;
use crewboard_entity::notification::{Notification, NotificationPreferences};

use super::dispatch::{DispatchRequest, NotificationDispatcher};
use crate::context::RequestContext;

/// Partial change of channel preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    /// Email switch.
    pub email: Option<bool>,
    /// SMS switch.
    pub sms: Option<bool>,
    /// Push switch.
    pub push: Option<bool>,
    /// In-app switch.
    pub in_app: Option<bool>,
}

/// Stores in-app notifications and forwards deliveries to the dispatcher.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    in_app_enabled: bool,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("in_app_enabled", &self.in_app_enabled)
            .finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        store: Arc<dyn NotificationStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        in_app_enabled: bool,
    ) -> Self {
        Self {
            store,
            dispatcher,
            in_app_enabled,
        }
    }

    /// Notify one employee about one event.
    ///
    /// Stores the in-app notification when allowed, then hands the switched-on
    /// external channels to the dispatcher. A failed delivery is logged and
    /// does not fail the call; the stored notification is returned.
    pub async fn notify(
        &self,
        event: &AssignmentEvent,
        job_name: &str,
    ) -> AppResult<Option<Notification>> {
        let prefs = self.preferences_for(event.employee_id).await?;

        let stored = if self.in_app_enabled && prefs.in_app {
            let notification =
                Notification::for_event(event.employee_id, event.job_id, event.event_type, job_name);
            Some(self.store.create(&notification).await?)
        } else {
            None
        };

        let channels = prefs.external_channels();
        if channels.is_empty() {
            debug!(employee_id = %event.employee_id, "No external channels enabled");
        } else {
            let request = DispatchRequest {
                employee_id: event.employee_id,
                job_id: event.job_id,
                event_type: event.event_type,
                channels,
            };
            if let Err(e) = self.dispatcher.dispatch(&request).await {
                warn!(
                    employee_id = %event.employee_id,
                    job_id = %event.job_id,
                    error = %e,
                    "Notification delivery failed"
                );
            }
        }

        Ok(stored)
    }

    /// Notify every event's employee on a background task.
    ///
    /// The caller does not wait; failures are logged per event.
    pub fn notify_in_background(&self, events: Vec<AssignmentEvent>, job_name: String) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            for event in &events {
                if let Err(e) = service.notify(event, &job_name).await {
                    warn!(
                        employee_id = %event.employee_id,
                        job_id = %event.job_id,
                        event_type = %event.event_type,
                        error = %e,
                        "Failed to notify employee"
                    );
                }
            }
            if !events.is_empty() {
                info!(count = events.len(), job = %job_name, "Assignment notifications sent");
            }
        })
    }

    /// Unread in-app notifications of the caller, newest first.
    pub async fn unread(&self, ctx: &RequestContext) -> AppResult<Vec<Notification>> {
        self.store.find_unread(&ctx.employee_id()).await
    }

    /// Mark one of the caller's notifications as read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: NotificationId) -> AppResult<()> {
        if self.store.mark_read(&id, &ctx.employee_id()).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Notification {id} not found")))
        }
    }

    /// The caller's channel preferences (all on when never saved).
    pub async fn get_preferences(&self, ctx: &RequestContext) -> AppResult<NotificationPreferences> {
        self.preferences_for(ctx.employee_id()).await
    }

    /// Change some of the caller's channel switches.
    pub async fn update_preferences(
        &self,
        ctx: &RequestContext,
        update: PreferencesUpdate,
    ) -> AppResult<NotificationPreferences> {
        let mut prefs = self.preferences_for(ctx.employee_id()).await?;
        if let Some(email) = update.email {
            prefs.email = email;
        }
        if let Some(sms) = update.sms {
            prefs.sms = sms;
        }
        if let Some(push) = update.push {
            prefs.push = push;
        }
        if let Some(in_app) = update.in_app {
            prefs.in_app = in_app;
        }

        let saved = self.store.upsert_preferences(&prefs).await?;
        info!(employee_id = %saved.employee_id, "Notification preferences updated");
        Ok(saved)
    }

    async fn preferences_for(&self, employee: EmployeeId) -> AppResult<NotificationPreferences> {
        Ok(self
            .store
            .get_preferences(&employee)
            .await?
            .unwrap_or_else(|| NotificationPreferences::default_for(employee)))
    }
}
