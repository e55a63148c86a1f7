//! Editable job drafts.
//!
//! A [`JobDraft`] is what the job-editing surface holds between loading a
//! job (or starting a new one) and saving it. Shift membership changes go
//! through [`JobDraft::move_employee`], which consults the availability
//! checker before an employee enters a shift from the pool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crewboard_core::error::{AppError, FieldErrors};
use crewboard_core::types::id::{EmployeeId, JobId, UserId};
use crewboard_entity::job::{Job, JobStatus, JobUpdate, ShiftPartition, Zone};

use super::availability::{AvailabilityChecker, DateRange};

/// Result of a drag-and-drop gesture on a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Membership changed.
    Applied,
    /// Nothing to do (same zone, or the state already matched).
    Unchanged,
    /// The employee is booked on overlapping jobs; membership unchanged.
    Unavailable {
        /// The jobs that block the move.
        conflicts: Vec<JobId>,
    },
}

/// Editable attributes of a job plus its shift membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobDraft {
    /// Set once the job has been saved.
    #[serde(default)]
    pub id: Option<JobId>,
    /// Job name.
    #[validate(length(min = 3, message = "Job name must be at least 3 characters"))]
    pub name: String,
    /// Customer-facing job number.
    #[validate(length(min = 4, message = "Job number must be at least 4 characters"))]
    pub job_number: String,
    /// Site location.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: JobStatus,
    /// When work starts.
    pub start_date: DateTime<Utc>,
    /// When work ends.
    pub end_date: DateTime<Utc>,
    /// Calendar colour.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(flatten)]
    staffing: ShiftPartition,
}

impl JobDraft {
    /// A new, never-saved draft with nobody assigned.
    pub fn new(
        name: impl Into<String>,
        job_number: impl Into<String>,
        location: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            job_number: job_number.into(),
            location: location.into(),
            description: String::new(),
            status: JobStatus::default(),
            start_date,
            end_date,
            color: None,
            staffing: ShiftPartition::new(),
        }
    }

    /// Open a saved job for editing.
    pub fn from_job(job: &Job) -> Self {
        Self {
            id: Some(job.id),
            name: job.name.clone(),
            job_number: job.job_number.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            status: job.status,
            start_date: job.start_date,
            end_date: job.end_date,
            color: job.color.clone(),
            staffing: job.staffing.clone(),
        }
    }

    /// Current shift membership.
    pub fn staffing(&self) -> &ShiftPartition {
        &self.staffing
    }

    /// The date range the draft occupies.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Availability checker for this draft's range, excluding the draft's own job.
    pub fn checker<'a>(&self, jobs: &'a [Job]) -> AvailabilityChecker<'a> {
        AvailabilityChecker::new(self.range(), self.id, jobs)
    }

    /// Apply a drag-and-drop gesture from `source` to `target`.
    ///
    /// `source` only tells whether the drop landed where the drag started;
    /// the move itself starts from the employee's current zone in the draft.
    /// Entering a shift from the pool is refused when the employee is booked
    /// on an overlapping job in `jobs`. Moves between shifts are not
    /// re-checked: the employee is already committed to this job.
    pub fn move_employee(
        &mut self,
        employee: EmployeeId,
        source: Zone,
        target: Zone,
        jobs: &[Job],
    ) -> MoveOutcome {
        if source == target {
            return MoveOutcome::Unchanged;
        }

        let current = self.staffing.zone_of(employee);
        if current == target {
            return MoveOutcome::Unchanged;
        }
        if current != source {
            debug!(
                employee_id = %employee,
                reported = ?source,
                actual = ?current,
                "Drag source does not match draft membership"
            );
        }

        if current == Zone::Pool {
            let conflicts = self.checker(jobs).conflicts(employee);
            if !conflicts.is_empty() {
                debug!(
                    employee_id = %employee,
                    conflicts = conflicts.len(),
                    "Employee unavailable for draft range"
                );
                return MoveOutcome::Unavailable { conflicts };
            }
        }

        self.staffing.move_between_zones(employee, current, target);
        MoveOutcome::Applied
    }

    /// Apply a partial update of the descriptive fields.
    pub fn apply(&mut self, update: JobUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(job_number) = update.job_number {
            self.job_number = job_number;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(color) = update.color {
            self.color = Some(color);
        }
    }

    /// Collect field-keyed validation messages. Empty when the draft can be saved.
    pub fn field_errors(&self) -> FieldErrors {
        let mut fields = FieldErrors::new();
        if let Err(errors) = self.validate() {
            for (field, errs) in errors.field_errors() {
                let messages = errs.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                });
                fields
                    .entry(field.to_string())
                    .or_default()
                    .extend(messages);
            }
        }
        if self.end_date <= self.start_date {
            fields
                .entry("end_date".to_string())
                .or_default()
                .push("End date must be after start date".to_string());
        }
        fields
    }

    /// Fail with a field-keyed validation error unless the draft can be saved.
    pub fn check(&self) -> Result<(), AppError> {
        let fields = self.field_errors();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation_fields(fields))
        }
    }

    /// Build the job document to persist.
    ///
    /// `existing` is the stored job when the draft was opened from one; its
    /// audit fields are kept.
    pub fn to_job(&self, existing: Option<&Job>, actor: UserId, now: DateTime<Utc>) -> Job {
        Job {
            id: existing.map(|j| j.id).or(self.id).unwrap_or_default(),
            name: self.name.clone(),
            job_number: self.job_number.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            staffing: self.staffing.clone(),
            color: self.color.clone(),
            created_by: existing.map_or(Some(actor), |j| j.created_by),
            created_at: existing.map_or(now, |j| j.created_at),
            updated_at: now,
        }
    }
}
