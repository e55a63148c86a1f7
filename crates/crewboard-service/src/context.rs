//! Request context carrying the authenticated caller and their role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::error::AppError;
use crewboard_core::types::id::{EmployeeId, UserId};
use crewboard_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from the identity headers set by the authentication platform and
/// passed into service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Fails with an authorization error unless the caller has at least `min`.
    pub fn require_role(&self, min: UserRole) -> Result<(), AppError> {
        if self.role.has_at_least(min) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{}' is required, caller is '{}'",
                min, self.role
            )))
        }
    }

    /// The roster entry of the caller. Crew accounts share their id with
    /// their employee record.
    pub fn employee_id(&self) -> EmployeeId {
        EmployeeId::from_uuid(self.user_id.into_uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewboard_core::error::ErrorKind;

    #[test]
    fn test_require_role() {
        let foreman = RequestContext::new(UserId::new(), UserRole::Foreman);
        assert!(foreman.require_role(UserRole::Crew).is_ok());
        assert!(foreman.require_role(UserRole::Foreman).is_ok());
        let err = foreman.require_role(UserRole::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_employee_id_shares_uuid() {
        let ctx = RequestContext::new(UserId::new(), UserRole::Crew);
        assert_eq!(ctx.employee_id().into_uuid(), ctx.user_id.into_uuid());
    }
}
