//! In-app notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crewboard_core::events::AssignmentEventType;
use crewboard_core::types::id::{EmployeeId, JobId, NotificationId};

/// A notification shown to an employee inside the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient.
    pub employee_id: EmployeeId,
    /// The job the notification is about.
    pub job_id: JobId,
    /// What happened.
    pub event_type: AssignmentEventType,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the recipient has read it.
    pub is_read: bool,
    /// When it was created.
    pub created_at: DateTime<Utc>,
    /// When it was read.
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Create an unread notification about `job_name`.
    pub fn for_event(
        employee_id: EmployeeId,
        job_id: JobId,
        event_type: AssignmentEventType,
        job_name: &str,
    ) -> Self {
        let (title, message) = match event_type {
            AssignmentEventType::JobAssignment => (
                "New Job Assignment",
                format!("You have been assigned to {job_name}"),
            ),
            AssignmentEventType::ShiftChange => (
                "Shift Changed",
                format!("Your shift on {job_name} has changed"),
            ),
            AssignmentEventType::JobUnassignment => (
                "Removed From Job",
                format!("You are no longer assigned to {job_name}"),
            ),
        };

        Self {
            id: NotificationId::new(),
            employee_id,
            job_id,
            event_type,
            title: title.to_string(),
            message,
            is_read: false,
            created_at: Utc::now(),
            read_at: None,
        }
    }

    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Mark the notification as read now.
    pub fn mark_read(&mut self) {
        if !self.is_read {
            self.is_read = true;
            self.read_at = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_message_names_job() {
        let n = Notification::for_event(
            EmployeeId::new(),
            JobId::new(),
            AssignmentEventType::JobAssignment,
            "Bridge repaint",
        );
        assert_eq!(n.title, "New Job Assignment");
        assert_eq!(n.message, "You have been assigned to Bridge repaint");
        assert!(n.is_unread());
    }

    #[test]
    fn test_mark_read_keeps_first_timestamp() {
        let mut n = Notification::for_event(
            EmployeeId::new(),
            JobId::new(),
            AssignmentEventType::ShiftChange,
            "Tank lining",
        );
        n.mark_read();
        let first = n.read_at;
        n.mark_read();
        assert!(!n.is_unread());
        assert_eq!(n.read_at, first);
    }
}
