//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::types::id::{EmployeeId, JobId, UserId};

use super::staffing::ShiftPartition;
use super::status::JobStatus;

/// A scheduled work engagement with a date range, location and crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Job name.
    pub name: String,
    /// Customer-facing job number.
    pub job_number: String,
    /// Site location.
    pub location: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: JobStatus,
    /// When work starts.
    pub start_date: DateTime<Utc>,
    /// When work ends; always after `start_date` for saved jobs.
    pub end_date: DateTime<Utc>,
    /// Shift membership, stored as the three employee-id lists.
    #[serde(flatten)]
    pub staffing: ShiftPartition,
    /// Calendar colour (CSS colour string).
    #[serde(default)]
    pub color: Option<String>,
    /// The user who created the job.
    #[serde(default)]
    pub created_by: Option<UserId>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Check whether `employee` is on either shift of this job.
    pub fn has_employee(&self, employee: EmployeeId) -> bool {
        self.staffing.is_assigned(employee)
    }

    /// Check whether the job still needs its crew.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Case-insensitive match of `term` against name, location and job number.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
            || self.job_number.to_lowercase().contains(&term)
    }
}

/// Partial update of a job's descriptive fields.
///
/// Shift membership is not part of it; staffing changes go through
/// [`ShiftPartition`] operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    /// New name.
    pub name: Option<String>,
    /// New job number.
    pub job_number: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<JobStatus>,
    /// New start.
    pub start_date: Option<DateTime<Utc>>,
    /// New end.
    pub end_date: Option<DateTime<Utc>>,
    /// New colour.
    pub color: Option<String>,
}

impl JobUpdate {
    /// Check whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.job_number.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::job::shift::Shift;

    #[test]
    fn test_legacy_document_without_shift_lists() {
        let json = serde_json::json!({
            "id": JobId::new(),
            "name": "Bridge repaint",
            "job_number": "J-1042",
            "location": "Route 9",
            "status": "active",
            "start_date": "2024-06-01T00:00:00Z",
            "end_date": "2024-06-10T00:00:00Z",
            "created_at": "2024-05-01T00:00:00Z",
            "updated_at": "2024-05-01T00:00:00Z"
        });

        let job: Job = serde_json::from_value(json).expect("legacy job");
        assert_eq!(job.status, JobStatus::InProgress);
        assert!(job.staffing.assigned_employees().is_empty());
        assert_eq!(job.description, "");
        assert_eq!(
            job.start_date,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_shift_lists_serialize_at_top_level() {
        let a = EmployeeId::new();
        let mut staffing = ShiftPartition::new();
        staffing.assign(a, Shift::Night);

        let now = Utc::now();
        let job = Job {
            id: JobId::new(),
            name: "Tank lining".into(),
            job_number: "J-2001".into(),
            location: "Plant 3".into(),
            description: String::new(),
            status: JobStatus::Pending,
            start_date: now,
            end_date: now,
            staffing,
            color: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&job).expect("serialize");
        assert_eq!(value["night_shift"], serde_json::json!([a]));
        assert_eq!(value["assigned_employees"], serde_json::json!([a]));
        assert_eq!(value["day_shift"], serde_json::json!([]));
        assert!(job.has_employee(a));
    }

    #[test]
    fn test_search_matches_name_and_location() {
        let now = Utc::now();
        let job = Job {
            id: JobId::new(),
            name: "Bridge Repaint".into(),
            job_number: "J-1042".into(),
            location: "Route 9".into(),
            description: String::new(),
            status: JobStatus::Pending,
            start_date: now,
            end_date: now,
            staffing: ShiftPartition::new(),
            color: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        };
        assert!(job.matches_search("bridge"));
        assert!(job.matches_search("ROUTE"));
        assert!(job.matches_search("  "));
        assert!(!job.matches_search("tunnel"));
    }
}
