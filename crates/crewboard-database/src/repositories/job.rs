//! Job repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crewboard_core::error::{AppError, ErrorKind};
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::{EmployeeId, JobId, UserId};
use crewboard_entity::job::staffing::StaffingLists;
use crewboard_entity::job::{Job, JobStatus, ShiftPartition};

const SELECT_COLUMNS: &str = "id, name, job_number, location, description, status, start_date, \
     end_date, assigned_employees, day_shift, night_shift, color, created_by, created_at, updated_at";

/// Row shape of the `jobs` table.
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    name: String,
    job_number: String,
    location: String,
    description: String,
    status: JobStatus,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    assigned_employees: Option<Vec<Uuid>>,
    day_shift: Option<Vec<Uuid>>,
    night_shift: Option<Vec<Uuid>>,
    color: Option<String>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        let lists = StaffingLists {
            assigned_employees: EmployeeId::from_uuids(&row.assigned_employees.unwrap_or_default()),
            day_shift: EmployeeId::from_uuids(&row.day_shift.unwrap_or_default()),
            night_shift: EmployeeId::from_uuids(&row.night_shift.unwrap_or_default()),
        };
        if !lists.is_consistent() {
            warn!(
                job_id = %row.id,
                assigned = lists.assigned_employees.len(),
                day = lists.day_shift.len(),
                night = lists.night_shift.len(),
                "Normalizing inconsistent shift lists"
            );
        }

        Job {
            id: JobId::from_uuid(row.id),
            name: row.name,
            job_number: row.job_number,
            location: row.location,
            description: row.description,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
            staffing: ShiftPartition::from(lists),
            color: row.color,
            created_by: row.created_by.map(UserId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for job documents.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Job, JobId> for JobRepository {
    async fn find_by_id(&self, id: &JobId) -> AppResult<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))?;

        Ok(row.map(Job::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM jobs ORDER BY start_date, created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn create(&self, job: &Job) -> AppResult<Job> {
        let lists = job.staffing.to_lists();
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "INSERT INTO jobs (id, name, job_number, location, description, status, start_date, \
             end_date, assigned_employees, day_shift, night_shift, color, created_by, created_at, \
             updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(job.id.into_uuid())
        .bind(&job.name)
        .bind(&job.job_number)
        .bind(&job.location)
        .bind(&job.description)
        .bind(job.status)
        .bind(job.start_date)
        .bind(job.end_date)
        .bind(EmployeeId::to_uuids(&lists.assigned_employees))
        .bind(EmployeeId::to_uuids(&lists.day_shift))
        .bind(EmployeeId::to_uuids(&lists.night_shift))
        .bind(&job.color)
        .bind(job.created_by.map(UserId::into_uuid))
        .bind(job.created_at)
        .bind(job.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))?;

        Ok(row.into())
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        let lists = job.staffing.to_lists();
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "UPDATE jobs SET name = $2, job_number = $3, location = $4, description = $5, \
             status = $6, start_date = $7, end_date = $8, assigned_employees = $9, \
             day_shift = $10, night_shift = $11, color = $12, updated_at = $13 \
             WHERE id = $1 RETURNING {SELECT_COLUMNS}"
        ))
        .bind(job.id.into_uuid())
        .bind(&job.name)
        .bind(&job.job_number)
        .bind(&job.location)
        .bind(&job.description)
        .bind(job.status)
        .bind(job.start_date)
        .bind(job.end_date)
        .bind(EmployeeId::to_uuids(&lists.assigned_employees))
        .bind(EmployeeId::to_uuids(&lists.day_shift))
        .bind(EmployeeId::to_uuids(&lists.night_shift))
        .bind(&job.color)
        .bind(job.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?;

        row.map(Job::from)
            .ok_or_else(|| AppError::not_found(format!("Job {} not found", job.id)))
    }

    async fn delete(&self, id: &JobId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;
        Ok(count as u64)
    }
}
