//! Hand-off of notifications to the external multi-channel delivery function.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crewboard_core::config::notification::NotificationConfig;
use crewboard_core::error::{AppError, ErrorKind};
use crewboard_core::events::AssignmentEventType;
use crewboard_core::result::AppResult;
use crewboard_core::types::id::{EmployeeId, JobId};
use crewboard_entity::notification::NotificationChannel;

/// Body sent to the delivery function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Recipient.
    pub employee_id: EmployeeId,
    /// Job the notification is about.
    pub job_id: JobId,
    /// What happened.
    pub event_type: AssignmentEventType,
    /// Channels the recipient has switched on.
    pub channels: Vec<NotificationChannel>,
}

/// Delivers notifications over email, SMS and push.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync + 'static {
    /// Deliver one request. Errors are reported to the caller, who logs them.
    async fn dispatch(&self, request: &DispatchRequest) -> AppResult<()>;
}

/// Posts requests as JSON to the configured delivery endpoint.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    url: String,
}

impl HttpDispatcher {
    /// Create a dispatcher posting to `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build notification HTTP client",
                    e,
                )
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl NotificationDispatcher for HttpDispatcher {
    async fn dispatch(&self, request: &DispatchRequest) -> AppResult<()> {
        debug!(
            employee_id = %request.employee_id,
            job_id = %request.job_id,
            event_type = %request.event_type,
            "Posting notification to delivery endpoint"
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Notification delivery request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Notification delivery returned {status}: {body}"
            )));
        }
        Ok(())
    }
}

/// Logs requests without delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

#[async_trait]
impl NotificationDispatcher for LogDispatcher {
    async fn dispatch(&self, request: &DispatchRequest) -> AppResult<()> {
        let channels: Vec<&str> = request.channels.iter().map(|c| c.as_str()).collect();
        info!(
            employee_id = %request.employee_id,
            job_id = %request.job_id,
            event_type = %request.event_type,
            channels = ?channels,
            "Notification delivery skipped (no delivery endpoint configured)"
        );
        Ok(())
    }
}

/// Build the dispatcher selected by configuration.
pub fn from_config(config: &NotificationConfig) -> AppResult<Arc<dyn NotificationDispatcher>> {
    match config.delivery_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            info!(url = %url, "Notification delivery via HTTP endpoint");
            Ok(Arc::new(HttpDispatcher::new(
                url,
                Duration::from_secs(config.timeout_seconds),
            )?))
        }
        _ => {
            warn!("No notification delivery endpoint configured; deliveries are only logged");
            Ok(Arc::new(LogDispatcher))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = DispatchRequest {
            employee_id: EmployeeId::new(),
            job_id: JobId::new(),
            event_type: AssignmentEventType::JobAssignment,
            channels: vec![NotificationChannel::Email, NotificationChannel::Push],
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["event_type"], "job_assignment");
        assert_eq!(body["channels"], serde_json::json!(["email", "push"]));
    }

    #[test]
    fn test_from_config_without_url_logs_only() {
        let config = NotificationConfig::default();
        assert!(from_config(&config).is_ok());

        let config = NotificationConfig {
            delivery_url: Some("http://localhost:9/notify".into()),
            ..NotificationConfig::default()
        };
        assert!(from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_log_dispatcher_never_fails() {
        let request = DispatchRequest {
            employee_id: EmployeeId::new(),
            job_id: JobId::new(),
            event_type: AssignmentEventType::ShiftChange,
            channels: Vec::new(),
        };
        assert!(LogDispatcher.dispatch(&request).await.is_ok());
    }
}
