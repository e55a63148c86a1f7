//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};

use crewboard_core::types::id::NotificationId;
use crewboard_entity::notification::{Notification, NotificationPreferences};
use crewboard_service::notification::PreferencesUpdate;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_unread(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.unread(&auth).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<NotificationId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Marked as read"))))
}

/// GET /api/notifications/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NotificationPreferences>>, ApiError> {
    let prefs = state.notification_service.get_preferences(&auth).await?;
    Ok(Json(ApiResponse::ok(prefs)))
}

/// PUT /api/notifications/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(update): ApiJson<PreferencesUpdate>,
) -> Result<Json<ApiResponse<NotificationPreferences>>, ApiError> {
    let prefs = state
        .notification_service
        .update_preferences(&auth, update)
        .await?;
    Ok(Json(ApiResponse::ok(prefs)))
}
