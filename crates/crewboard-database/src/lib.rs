//! # crewboard-database
//!
//! PostgreSQL connection management, embedded migrations and the
//! repository implementations for jobs, employees and notifications.
//! An in-memory backend with the same traits is provided for local runs
//! and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use connection::DatabasePool;
pub use repositories::NotificationStore;
pub use stores::{EmployeeStore, JobStore, Stores};
