//! Employee availability over a date range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::types::id::{EmployeeId, JobId};
use crewboard_entity::employee::Employee;
use crewboard_entity::job::Job;

/// A closed interval `[start, end]` of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant of the range.
    pub start: DateTime<Utc>,
    /// Last instant of the range.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The range a job occupies.
    pub fn of_job(job: &Job) -> Self {
        Self::new(job.start_date, job.end_date)
    }

    /// Inclusive overlap: ranges that only touch at an endpoint overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Check whether `employee` is free for `range`.
///
/// `exclude` is the candidate job itself (absent for a draft that was never
/// saved). The employee is unavailable iff some other job overlaps `range`
/// and has the employee assigned.
pub fn is_employee_available(
    range: DateRange,
    exclude: Option<JobId>,
    employee: EmployeeId,
    jobs: &[Job],
) -> bool {
    AvailabilityChecker::new(range, exclude, jobs).is_available(employee)
}

/// Availability queries for one candidate range over a fixed job list.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityChecker<'a> {
    range: DateRange,
    exclude: Option<JobId>,
    jobs: &'a [Job],
}

impl<'a> AvailabilityChecker<'a> {
    /// Create a checker for `range`, ignoring the job `exclude`.
    pub fn new(range: DateRange, exclude: Option<JobId>, jobs: &'a [Job]) -> Self {
        Self {
            range,
            exclude,
            jobs,
        }
    }

    /// The candidate range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Check whether `employee` has no overlapping assignment elsewhere.
    pub fn is_available(&self, employee: EmployeeId) -> bool {
        self.conflicting_jobs(employee).next().is_none()
    }

    /// Ids of the jobs that make `employee` unavailable, in job-list order.
    pub fn conflicts(&self, employee: EmployeeId) -> Vec<JobId> {
        self.conflicting_jobs(employee).map(|job| job.id).collect()
    }

    /// Employees of `universe` that are free for the range.
    pub fn available_employees<'e>(&self, universe: &'e [Employee]) -> Vec<&'e Employee> {
        universe.iter().filter(|e| self.is_available(e.id)).collect()
    }

    fn conflicting_jobs(&self, employee: EmployeeId) -> impl Iterator<Item = &'a Job> + '_ {
        let range = self.range;
        let exclude = self.exclude;
        self.jobs.iter().filter(move |job| {
            Some(job.id) != exclude
                && range.overlaps(&DateRange::of_job(job))
                && job.has_employee(employee)
        })
    }
}
