//! Staffing core: availability, job drafts and the schedule context.
//!
//! Everything here is synchronous and pure over the data it is handed;
//! the services load that data from the repositories.

pub mod availability;
pub mod context;
pub mod draft;

pub use availability::{AvailabilityChecker, DateRange, is_employee_available};
pub use context::{Board, ScheduleContext};
pub use draft::{JobDraft, MoveOutcome};
