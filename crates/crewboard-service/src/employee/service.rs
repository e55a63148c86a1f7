//! Roster listing, hiring and removal.

use tracing::info;

use crewboard_core::error::{AppError, FieldErrors};
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::EmployeeId;
use crewboard_database::{EmployeeStore, JobStore};
use crewboard_entity::employee::{CreateEmployee, Employee};
use crewboard_entity::user::UserRole;

use crate::context::RequestContext;
use crate::schedule::ScheduleContext;

const MIN_NAME_LEN: usize = 2;

/// Manages the employee universe jobs are staffed from.
#[derive(Clone)]
pub struct EmployeeService {
    employees: EmployeeStore,
    jobs: JobStore,
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService").finish_non_exhaustive()
    }
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(employees: EmployeeStore, jobs: JobStore) -> Self {
        Self { employees, jobs }
    }

    /// The whole roster, ordered by name.
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.employees.find_all().await
    }

    /// Add an employee. Admin only.
    pub async fn add(&self, ctx: &RequestContext, data: CreateEmployee) -> AppResult<Employee> {
        ctx.require_role(UserRole::Admin)?;

        let name = data.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            let mut fields = FieldErrors::new();
            fields.insert(
                "name".to_string(),
                vec!["Employee name must be at least 2 characters".to_string()],
            );
            return Err(AppError::validation_fields(fields));
        }

        let employee = self.employees.create(&Employee::new(name)).await?;
        info!(employee_id = %employee.id, user_id = %ctx.user_id, "Employee added");
        Ok(employee)
    }

    /// Remove an employee. Admin only; refused while the employee is on a
    /// shift of a job that is not completed or cancelled.
    pub async fn remove(&self, ctx: &RequestContext, id: EmployeeId) -> AppResult<()> {
        ctx.require_role(UserRole::Admin)?;

        let (employees, jobs) =
            futures::try_join!(self.employees.find_all(), self.jobs.find_all())?;
        let context = ScheduleContext::new(employees, jobs);
        if context.employee(id).is_none() {
            return Err(AppError::not_found(format!("Employee {id} not found")));
        }

        let active: Vec<String> = context
            .active_jobs_for(id)
            .iter()
            .map(|j| j.id.to_string())
            .collect();
        if !active.is_empty() {
            return Err(AppError::conflict(
                "Employee is still assigned to active jobs",
            )
            .with_details(serde_json::json!({ "jobs": active })));
        }

        self.employees.delete(&id).await?;
        info!(employee_id = %id, user_id = %ctx.user_id, "Employee removed");
        Ok(())
    }
}
