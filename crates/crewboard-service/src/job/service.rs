//! Job CRUD, staffing moves and draft persistence.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crewboard_core::error::{AppError, ErrorKind};
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::{EmployeeId, JobId};
use crewboard_database::{EmployeeStore, JobStore};
use crewboard_entity::employee::Employee;
use crewboard_entity::job::{Job, JobUpdate, ShiftPartition, Zone};
use crewboard_entity::user::UserRole;

use super::filter::JobFilter;
use crate::context::RequestContext;
use crate::notification::{NotificationService, assignment_events};
use crate::schedule::{Board, DateRange, JobDraft, MoveOutcome, ScheduleContext};

/// Outcome of a drag-and-drop request on a saved job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResult {
    /// What happened to the membership.
    #[serde(flatten)]
    pub outcome: MoveOutcome,
    /// The job after the move.
    pub job: Job,
    /// Zone lists after the move.
    pub board: Board,
}

/// Schedules jobs and staffs their shifts.
#[derive(Clone)]
pub struct JobService {
    jobs: JobStore,
    employees: EmployeeStore,
    notifications: Arc<NotificationService>,
}

impl std::fmt::Debug for JobService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobService").finish_non_exhaustive()
    }
}

impl JobService {
    /// Creates a new job service.
    pub fn new(
        jobs: JobStore,
        employees: EmployeeStore,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            jobs,
            employees,
            notifications,
        }
    }

    /// Load the roster and every job.
    pub async fn load_context(&self) -> AppResult<ScheduleContext> {
        let (employees, jobs) =
            futures::try_join!(self.employees.find_all(), self.jobs.find_all())?;
        Ok(ScheduleContext::new(employees, jobs))
    }

    /// Jobs passing `filter`, ordered by start.
    pub async fn list_jobs(&self, filter: &JobFilter) -> AppResult<Vec<Job>> {
        let jobs = self.jobs.find_all().await?;
        Ok(jobs.into_iter().filter(|j| filter.matches(j)).collect())
    }

    /// Get one job.
    pub async fn get_job(&self, id: JobId) -> AppResult<Job> {
        self.jobs
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }

    /// Create a job from a never-saved draft.
    pub async fn create_job(&self, ctx: &RequestContext, mut draft: JobDraft) -> AppResult<Job> {
        ctx.require_role(UserRole::Foreman)?;
        draft.id = None;
        self.save_draft(ctx, &draft).await
    }

    /// Change descriptive fields of a job. Staffing is left as stored.
    pub async fn update_job(
        &self,
        ctx: &RequestContext,
        id: JobId,
        update: JobUpdate,
    ) -> AppResult<Job> {
        ctx.require_role(UserRole::Foreman)?;
        let job = self.get_job(id).await?;
        if update.is_empty() {
            return Ok(job);
        }

        let mut draft = JobDraft::from_job(&job);
        draft.apply(update);
        self.save_draft(ctx, &draft).await
    }

    /// Delete a job and tell its crew.
    pub async fn delete_job(&self, ctx: &RequestContext, id: JobId) -> AppResult<()> {
        ctx.require_role(UserRole::Foreman)?;
        let job = self.get_job(id).await?;

        if !self.jobs.delete(&id).await? {
            return Err(AppError::not_found(format!("Job {id} not found")));
        }
        info!(job_id = %id, user_id = %ctx.user_id, "Job deleted");

        let events = assignment_events(
            id,
            Some(&job.staffing),
            &ShiftPartition::new(),
            Some(ctx.user_id),
        );
        self.notifications.notify_in_background(events, job.name);
        Ok(())
    }

    /// Zone lists of a saved job.
    pub async fn board(&self, id: JobId) -> AppResult<Board> {
        let context = self.load_context().await?;
        let job = context
            .job(id)
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;
        Ok(context.board_for(&job.staffing))
    }

    /// Apply one drag-and-drop gesture to a saved job and persist it.
    ///
    /// Unknown employees are ignored. An unavailable employee leaves the job
    /// untouched and is reported in the outcome.
    pub async fn move_employee(
        &self,
        ctx: &RequestContext,
        id: JobId,
        employee: EmployeeId,
        source: Zone,
        target: Zone,
    ) -> AppResult<MoveResult> {
        ctx.require_role(UserRole::Foreman)?;
        let context = self.load_context().await?;
        let job = context
            .job(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;

        let mut draft = JobDraft::from_job(&job);
        let outcome = if context.employee(employee).is_some() {
            draft.move_employee(employee, source, target, context.jobs())
        } else {
            debug!(employee_id = %employee, job_id = %id, "Ignoring move of unknown employee");
            MoveOutcome::Unchanged
        };

        let job = match outcome {
            MoveOutcome::Applied => self.persist(ctx, &draft, Some(&job), context.jobs()).await?,
            _ => job,
        };
        let board = context.board_for(&job.staffing);
        Ok(MoveResult {
            outcome,
            job,
            board,
        })
    }

    /// Validate and persist a draft, then notify affected employees.
    ///
    /// Employees entering a shift who are booked on an overlapping job make
    /// the save fail with a conflict. Storage failures surface as
    /// "Failed to save job"; the draft itself is never modified.
    pub async fn save_draft(&self, ctx: &RequestContext, draft: &JobDraft) -> AppResult<Job> {
        ctx.require_role(UserRole::Foreman)?;
        draft.check()?;

        let jobs = self.jobs.find_all().await?;
        let existing = match draft.id {
            Some(id) => Some(
                jobs.iter()
                    .find(|j| j.id == id)
                    .cloned()
                    .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?,
            ),
            None => None,
        };
        self.persist(ctx, draft, existing.as_ref(), &jobs).await
    }

    /// Employees free for `range`, ignoring the job `exclude`.
    pub async fn available_employees(
        &self,
        range: DateRange,
        exclude: Option<JobId>,
    ) -> AppResult<Vec<Employee>> {
        if range.end < range.start {
            return Err(AppError::validation("Range end must not be before its start"));
        }
        let context = self.load_context().await?;
        Ok(context
            .available_employees(range, exclude)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn persist(
        &self,
        ctx: &RequestContext,
        draft: &JobDraft,
        existing: Option<&Job>,
        jobs: &[Job],
    ) -> AppResult<Job> {
        let checker = draft.checker(jobs);
        let mut blocked = serde_json::Map::new();
        for id in draft.staffing().assigned_employees() {
            let newly_placed = existing.is_none_or(|j| !j.has_employee(*id));
            if newly_placed {
                let conflicts = checker.conflicts(*id);
                if !conflicts.is_empty() {
                    blocked.insert(id.to_string(), serde_json::to_value(conflicts)?);
                }
            }
        }
        if !blocked.is_empty() {
            return Err(AppError::conflict(
                "Some employees are already assigned to overlapping jobs",
            )
            .with_details(serde_json::Value::Object(blocked)));
        }

        let job = draft.to_job(existing, ctx.user_id, Utc::now());
        let saved = match existing {
            Some(_) => self.jobs.update(&job).await,
            None => self.jobs.create(&job).await,
        }
        .map_err(|e| match e.kind {
            ErrorKind::Database | ErrorKind::Internal => {
                warn!(job_id = %job.id, error = %e, "Failed to save job");
                AppError::with_source(ErrorKind::Database, "Failed to save job", e)
            }
            _ => e,
        })?;

        info!(
            job_id = %saved.id,
            user_id = %ctx.user_id,
            assigned = saved.staffing.assigned_employees().len(),
            created = existing.is_none(),
            "Job saved"
        );

        let events = assignment_events(
            saved.id,
            existing.map(|j| &j.staffing),
            &saved.staffing,
            Some(ctx.user_id),
        );
        self.notifications
            .notify_in_background(events, saved.name.clone());
        Ok(saved)
    }
}
