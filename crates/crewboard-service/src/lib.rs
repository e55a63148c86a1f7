//! # crewboard-service
//!
//! Business logic service layer for CrewBoard. The `schedule` module holds
//! the synchronous staffing core (availability checks, job drafts, the
//! schedule context); the remaining services orchestrate repositories and
//! notification delivery around it.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod employee;
pub mod job;
pub mod notification;
pub mod schedule;

pub use context::RequestContext;
pub use employee::EmployeeService;
pub use job::{JobFilter, JobService};
pub use notification::{HttpDispatcher, LogDispatcher, NotificationDispatcher, NotificationService};
pub use schedule::{AvailabilityChecker, Board, DateRange, JobDraft, MoveOutcome, ScheduleContext};
