//! Employee roster handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crewboard_core::types::id::EmployeeId;
use crewboard_entity::employee::{CreateEmployee, Employee};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    let employees = state.employee_service.list().await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// POST /api/employees
pub async fn add_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CreateEmployee>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    let employee = state.employee_service.add(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(employee))))
}

/// DELETE /api/employees/{id}
pub async fn remove_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EmployeeId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.employee_service.remove(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Employee removed"))))
}
