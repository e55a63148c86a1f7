//! The employee universe and job list one request works against.

use serde::{Deserialize, Serialize};

use crewboard_core::types::id::{EmployeeId, JobId};
use crewboard_entity::employee::Employee;
use crewboard_entity::job::{Job, ShiftPartition};

use super::availability::{AvailabilityChecker, DateRange};
use super::draft::JobDraft;

/// The three zone lists rendered by the drag-and-drop surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Employees not on this job.
    pub pool: Vec<Employee>,
    /// Employees on the day shift.
    pub day_shift: Vec<Employee>,
    /// Employees on the night shift.
    pub night_shift: Vec<Employee>,
}

/// Snapshot of the roster and all jobs, loaded once per request.
#[derive(Debug, Clone, Default)]
pub struct ScheduleContext {
    employees: Vec<Employee>,
    jobs: Vec<Job>,
}

impl ScheduleContext {
    /// Create a context from already-loaded data.
    pub fn new(employees: Vec<Employee>, jobs: Vec<Job>) -> Self {
        Self { employees, jobs }
    }

    /// The employee universe.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Every job.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Look up a roster entry.
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Look up a job.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Availability checker over this context's jobs.
    pub fn checker(&self, range: DateRange, exclude: Option<JobId>) -> AvailabilityChecker<'_> {
        AvailabilityChecker::new(range, exclude, &self.jobs)
    }

    /// Employees free for `range`, ignoring `exclude`.
    pub fn available_employees(&self, range: DateRange, exclude: Option<JobId>) -> Vec<&Employee> {
        self.checker(range, exclude)
            .available_employees(&self.employees)
    }

    /// Non-terminal jobs that have `employee` on a shift.
    pub fn active_jobs_for(&self, employee: EmployeeId) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| j.is_active() && j.has_employee(employee))
            .collect()
    }

    /// Zone lists of a draft.
    pub fn board(&self, draft: &JobDraft) -> Board {
        self.board_for(draft.staffing())
    }

    /// Zone lists of any shift partition.
    pub fn board_for(&self, staffing: &ShiftPartition) -> Board {
        Board {
            pool: owned(staffing.pool_employees(&self.employees)),
            day_shift: owned(staffing.day_shift_employees(&self.employees)),
            night_shift: owned(staffing.night_shift_employees(&self.employees)),
        }
    }
}

fn owned(list: Vec<&Employee>) -> Vec<Employee> {
    list.into_iter().cloned().collect()
}
