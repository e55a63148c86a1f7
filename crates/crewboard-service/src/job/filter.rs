//! Schedule list filters.

use serde::{Deserialize, Serialize};

use crewboard_core::types::id::EmployeeId;
use crewboard_entity::job::{Job, JobStatus};

/// Filters offered by the schedule view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilter {
    /// Only jobs with this status.
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Case-insensitive text matched against name, location and job number.
    #[serde(default)]
    pub search: Option<String>,
    /// Only jobs with this employee on a shift.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
}

impl JobFilter {
    /// Check whether `job` passes every set filter.
    pub fn matches(&self, job: &Job) -> bool {
        self.status.is_none_or(|s| job.status == s)
            && self.search.as_deref().is_none_or(|term| job.matches_search(term))
            && self.employee_id.is_none_or(|e| job.has_employee(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crewboard_core::types::id::JobId;
    use crewboard_entity::job::{Shift, ShiftPartition};

    fn job(name: &str, status: JobStatus, staff: Option<EmployeeId>) -> Job {
        let now = Utc::now();
        let mut staffing = ShiftPartition::new();
        if let Some(id) = staff {
            staffing.assign(id, Shift::Day);
        }
        Job {
            id: JobId::new(),
            name: name.into(),
            job_number: "J-0001".into(),
            location: "North yard".into(),
            description: String::new(),
            status,
            start_date: now,
            end_date: now,
            staffing,
            color: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(JobFilter::default().matches(&job("Bridge", JobStatus::Completed, None)));
    }

    #[test]
    fn test_filters_combine() {
        let a = EmployeeId::new();
        let filter = JobFilter {
            status: Some(JobStatus::InProgress),
            search: Some("north".into()),
            employee_id: Some(a),
        };
        assert!(filter.matches(&job("Bridge", JobStatus::InProgress, Some(a))));
        assert!(!filter.matches(&job("Bridge", JobStatus::Pending, Some(a))));
        assert!(!filter.matches(&job("Bridge", JobStatus::InProgress, None)));
    }
}
