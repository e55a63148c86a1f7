//! Job domain entities.

pub mod model;
pub mod shift;
pub mod staffing;
pub mod status;

pub use model::{Job, JobUpdate};
pub use shift::{Shift, Zone};
pub use staffing::{ShiftPartition, StaffingLists};
pub use status::JobStatus;
