//! PostgreSQL repository implementations for CrewBoard entities.

pub mod employee;
pub mod job;
pub mod notification;

pub use employee::EmployeeRepository;
pub use job::JobRepository;
pub use notification::{NotificationRepository, NotificationStore};
