//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::types::id::{EmployeeId, JobId};
use crewboard_entity::job::Zone;

/// Drop event from the drag-and-drop surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// The dragged employee.
    pub employee_id: EmployeeId,
    /// Zone the drag started in.
    pub from: Zone,
    /// Zone the employee was dropped on.
    pub to: Zone,
}

/// Query of `GET /api/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Candidate start (RFC 3339).
    pub start: DateTime<Utc>,
    /// Candidate end (RFC 3339).
    pub end: DateTime<Utc>,
    /// Job being edited, excluded from the scan.
    #[serde(default)]
    pub job_id: Option<JobId>,
}
