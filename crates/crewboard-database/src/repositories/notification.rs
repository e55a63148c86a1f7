//! Notification repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crewboard_core::error::{AppError, ErrorKind};
use crewboard_core::result::AppResult;
use crewboard_core::types::id::{EmployeeId, JobId, NotificationId};
use crewboard_entity::notification::{Notification, NotificationPreferences};

/// Storage for in-app notifications and channel preferences.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    /// Store a new notification.
    async fn create(&self, notification: &Notification) -> AppResult<Notification>;

    /// Unread notifications of `employee`, newest first.
    async fn find_unread(&self, employee: &EmployeeId) -> AppResult<Vec<Notification>>;

    /// Mark one of `employee`'s notifications as read. Returns `false` when
    /// no such notification exists for that employee.
    async fn mark_read(&self, id: &NotificationId, employee: &EmployeeId) -> AppResult<bool>;

    /// Stored preferences of `employee`, if any were ever saved.
    async fn get_preferences(
        &self,
        employee: &EmployeeId,
    ) -> AppResult<Option<NotificationPreferences>>;

    /// Insert or replace the preferences of `preferences.employee_id`.
    async fn upsert_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> AppResult<NotificationPreferences>;
}

#[derive(Debug, sqlx::FromRow)]
struct NotificationRow {
    id: Uuid,
    employee_id: Uuid,
    job_id: Uuid,
    event_type: String,
    title: String,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = AppError;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: NotificationId::from_uuid(row.id),
            employee_id: EmployeeId::from_uuid(row.employee_id),
            job_id: JobId::from_uuid(row.job_id),
            event_type: row.event_type.parse()?,
            title: row.title,
            message: row.message,
            is_read: row.is_read,
            created_at: row.created_at,
            read_at: row.read_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PreferencesRow {
    employee_id: Uuid,
    email: bool,
    sms: bool,
    push: bool,
    in_app: bool,
    updated_at: Option<DateTime<Utc>>,
}

impl From<PreferencesRow> for NotificationPreferences {
    fn from(row: PreferencesRow) -> Self {
        NotificationPreferences {
            employee_id: EmployeeId::from_uuid(row.employee_id),
            email: row.email,
            sms: row.sms,
            push: row.push,
            in_app: row.in_app,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed [`NotificationStore`].
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, notification: &Notification) -> AppResult<Notification> {
        let row = sqlx::query_as::<_, NotificationRow>(
            "INSERT INTO notifications (id, employee_id, job_id, event_type, title, message, \
             is_read, created_at, read_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(notification.id.into_uuid())
        .bind(notification.employee_id.into_uuid())
        .bind(notification.job_id.into_uuid())
        .bind(notification.event_type.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(notification.created_at)
        .bind(notification.read_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })?;
        row.try_into()
    }

    async fn find_unread(&self, employee: &EmployeeId) -> AppResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            "SELECT * FROM notifications WHERE employee_id = $1 AND is_read = FALSE \
             ORDER BY created_at DESC",
        )
        .bind(employee.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;
        rows.into_iter().map(Notification::try_from).collect()
    }

    async fn mark_read(&self, id: &NotificationId, employee: &EmployeeId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE, read_at = COALESCE(read_at, NOW()) \
             WHERE id = $1 AND employee_id = $2",
        )
        .bind(id.into_uuid())
        .bind(employee.into_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_preferences(
        &self,
        employee: &EmployeeId,
    ) -> AppResult<Option<NotificationPreferences>> {
        let row = sqlx::query_as::<_, PreferencesRow>(
            "SELECT * FROM notification_preferences WHERE employee_id = $1",
        )
        .bind(employee.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get preferences", e))?;
        Ok(row.map(NotificationPreferences::from))
    }

    async fn upsert_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> AppResult<NotificationPreferences> {
        let row = sqlx::query_as::<_, PreferencesRow>(
            "INSERT INTO notification_preferences (employee_id, email, sms, push, in_app, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW()) \
             ON CONFLICT (employee_id) DO UPDATE SET email = $2, sms = $3, push = $4, \
             in_app = $5, updated_at = NOW() \
             RETURNING *",
        )
        .bind(preferences.employee_id.into_uuid())
        .bind(preferences.email)
        .bind(preferences.sms)
        .bind(preferences.push)
        .bind(preferences.in_app)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to upsert preferences", e)
        })?;
        Ok(row.into())
    }
}
