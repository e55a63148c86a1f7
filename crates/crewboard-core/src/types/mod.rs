//! Shared value types.

pub mod id;

pub use id::{EmployeeId, JobId, NotificationId, UserId};
