//! Employee roster management.

pub mod service;

pub use service::EmployeeService;
