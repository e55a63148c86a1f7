//! Employee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::types::id::EmployeeId;

/// A member of the crew roster that can be placed on job shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable employee identifier referenced by job shift lists.
    pub id: EmployeeId,
    /// Display name shown in the pool and shift columns.
    pub name: String,
    /// When the employee was added to the roster.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new employee with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Data required to add an employee to the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// Display name.
    pub name: String,
}
