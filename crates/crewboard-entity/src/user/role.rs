//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// Variant order is privilege order: `Crew < Foreman < Admin`, so the
/// derived `Ord` is the single comparison used everywhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Field crew member; read-only access to the schedule.
    #[serde(alias = "employee")]
    Crew,
    /// Runs jobs; creates, edits and staffs them.
    Foreman,
    /// Full administrator; also manages the employee roster.
    Admin,
}

impl UserRole {
    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: UserRole) -> bool {
        *self >= other
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crew => "crew",
            Self::Foreman => "foreman",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = crewboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crew" | "employee" => Ok(Self::Crew),
            "foreman" => Ok(Self::Foreman),
            "admin" => Ok(Self::Admin),
            _ => Err(crewboard_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: crew, foreman, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::Crew < UserRole::Foreman);
        assert!(UserRole::Foreman < UserRole::Admin);
        assert!(UserRole::Admin.has_at_least(UserRole::Crew));
        assert!(UserRole::Foreman.has_at_least(UserRole::Foreman));
        assert!(!UserRole::Crew.has_at_least(UserRole::Foreman));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("FOREMAN".parse::<UserRole>().unwrap(), UserRole::Foreman);
        assert_eq!("employee".parse::<UserRole>().unwrap(), UserRole::Crew);
        assert!("manager".parse::<UserRole>().is_err());
    }
}
