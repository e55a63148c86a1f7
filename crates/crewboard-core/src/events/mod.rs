//! Domain events emitted when shift assignments change.
//!
//! Events are produced by the job service after a draft is persisted and
//! consumed by the notification service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::types::id::{EmployeeId, JobId, UserId};

/// The kind of assignment change an employee is notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentEventType {
    /// The employee was added to the job.
    JobAssignment,
    /// The employee moved between the day and night shift of the job.
    ShiftChange,
    /// The employee was removed from the job.
    JobUnassignment,
}

impl AssignmentEventType {
    /// Return the event type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobAssignment => "job_assignment",
            Self::ShiftChange => "shift_change",
            Self::JobUnassignment => "job_unassignment",
        }
    }
}

impl fmt::Display for AssignmentEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssignmentEventType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_assignment" | "JOB_ASSIGNMENT" => Ok(Self::JobAssignment),
            "shift_change" | "SHIFT_CHANGE" => Ok(Self::ShiftChange),
            "job_unassignment" | "JOB_UNASSIGNMENT" => Ok(Self::JobUnassignment),
            other => Err(AppError::validation(format!(
                "Unknown assignment event type: '{other}'"
            ))),
        }
    }
}

/// A single assignment change for one employee on one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEvent {
    /// The affected employee.
    pub employee_id: EmployeeId,
    /// The job whose staffing changed.
    pub job_id: JobId,
    /// What happened.
    pub event_type: AssignmentEventType,
    /// The user who saved the change (if known).
    pub actor_id: Option<UserId>,
    /// When the change was persisted.
    pub timestamp: DateTime<Utc>,
}

impl AssignmentEvent {
    /// Create a new assignment event stamped with the current time.
    pub fn new(
        employee_id: EmployeeId,
        job_id: JobId,
        event_type: AssignmentEventType,
        actor_id: Option<UserId>,
    ) -> Self {
        Self {
            employee_id,
            job_id,
            event_type,
            actor_id,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_parses_stored_and_legacy_names() {
        assert_eq!(
            "job_assignment".parse::<AssignmentEventType>().unwrap(),
            AssignmentEventType::JobAssignment
        );
        assert_eq!(
            "JOB_ASSIGNMENT".parse::<AssignmentEventType>().unwrap(),
            AssignmentEventType::JobAssignment
        );
        assert!("job_deleted".parse::<AssignmentEventType>().is_err());
    }

    #[test]
    fn test_event_type_serializes_snake_case() {
        let value = serde_json::to_value(AssignmentEventType::ShiftChange).unwrap();
        assert_eq!(value, serde_json::json!("shift_change"));
    }
}
