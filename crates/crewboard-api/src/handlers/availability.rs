//! Availability handler.

use axum::Json;
use axum::extract::{Query, State};

use crewboard_service::DateRange;

use crate::dto::request::AvailabilityQuery;
use crate::dto::response::{ApiResponse, AvailabilityResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/availability?start=&end=&job_id=
pub async fn available_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let range = DateRange::new(query.start, query.end);
    let employees = state
        .job_service
        .available_employees(range, query.job_id)
        .await?;

    Ok(Json(ApiResponse::ok(AvailabilityResponse {
        start: query.start,
        end: query.end,
        employees,
    })))
}
