//! In-memory repositories backed by `DashMap`.
//!
//! Used by the `memory` storage backend and by tests. Data lives only as
//! long as the process.

pub mod employee;
pub mod job;
pub mod notification;

pub use employee::MemoryEmployeeRepository;
pub use job::MemoryJobRepository;
pub use notification::MemoryNotificationStore;
