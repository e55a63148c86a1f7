//! Employee repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crewboard_core::error::{AppError, ErrorKind};
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::EmployeeId;
use crewboard_entity::employee::Employee;

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: EmployeeId::from_uuid(row.id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Repository for the employee roster.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Employee, EmployeeId> for EmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, created_at FROM employees WHERE id = $1",
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employee", e))?;
        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, name, created_at FROM employees ORDER BY name, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, employee: &Employee) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "INSERT INTO employees (id, name, created_at) VALUES ($1, $2, $3) \
             RETURNING id, name, created_at",
        )
        .bind(employee.id.into_uuid())
        .bind(&employee.name)
        .bind(employee.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create employee", e))?;
        Ok(row.into())
    }

    async fn update(&self, employee: &Employee) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "UPDATE employees SET name = $2 WHERE id = $1 RETURNING id, name, created_at",
        )
        .bind(employee.id.into_uuid())
        .bind(&employee.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update employee", e))?;
        row.map(Employee::from)
            .ok_or_else(|| AppError::not_found(format!("Employee {} not found", employee.id)))
    }

    async fn delete(&self, id: &EmployeeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;
        Ok(count as u64)
    }
}
