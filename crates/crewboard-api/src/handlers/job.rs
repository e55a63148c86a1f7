//! Job handlers: CRUD, board and drag-and-drop moves.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crewboard_core::types::id::JobId;
use crewboard_entity::job::{Job, JobUpdate};
use crewboard_service::job::MoveResult;
use crewboard_service::{Board, JobDraft, JobFilter};

use crate::dto::request::MoveRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<JobFilter>,
) -> Result<Json<ApiResponse<Vec<Job>>>, ApiError> {
    let jobs = state.job_service.list_jobs(&filter).await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(draft): ApiJson<JobDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Job>>), ApiError> {
    let job = state.job_service.create_job(&auth, draft).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job))))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<JobId>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = state.job_service.get_job(id).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<JobId>,
    ApiJson(update): ApiJson<JobUpdate>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = state.job_service.update_job(&auth, id, update).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<JobId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.job_service.delete_job(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Job deleted"))))
}

/// GET /api/jobs/{id}/board
pub async fn get_board(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<JobId>,
) -> Result<Json<ApiResponse<Board>>, ApiError> {
    let board = state.job_service.board(id).await?;
    Ok(Json(ApiResponse::ok(board)))
}

/// POST /api/jobs/{id}/moves
pub async fn move_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<JobId>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> Result<Json<ApiResponse<MoveResult>>, ApiError> {
    let result = state
        .job_service
        .move_employee(&auth, id, req.employee_id, req.from, req.to)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}
