//! In-memory employee repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crewboard_core::error::AppError;
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::EmployeeId;
use crewboard_entity::employee::Employee;

/// Process-local employee roster.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeRepository {
    employees: Arc<DashMap<EmployeeId, Employee>>,
}

impl MemoryEmployeeRepository {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Employee, EmployeeId> for MemoryEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.employees.get(id).map(|e| e.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let mut all: Vec<Employee> = self.employees.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(all)
    }

    async fn create(&self, employee: &Employee) -> AppResult<Employee> {
        if self.employees.contains_key(&employee.id) {
            return Err(AppError::conflict(format!(
                "Employee {} already exists",
                employee.id
            )));
        }
        self.employees.insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn update(&self, employee: &Employee) -> AppResult<Employee> {
        match self.employees.get_mut(&employee.id) {
            Some(mut entry) => {
                *entry = employee.clone();
                Ok(employee.clone())
            }
            None => Err(AppError::not_found(format!(
                "Employee {} not found",
                employee.id
            ))),
        }
    }

    async fn delete(&self, id: &EmployeeId) -> AppResult<bool> {
        Ok(self.employees.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.employees.len() as u64)
    }
}
