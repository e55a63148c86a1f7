//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{AvailabilityQuery, MoveRequest};
pub use response::{ApiResponse, AvailabilityResponse, HealthResponse, MessageResponse};
