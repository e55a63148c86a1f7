//! Job scheduling and staffing services.

pub mod filter;
pub mod service;

pub use filter::JobFilter;
pub use service::{JobService, MoveResult};
