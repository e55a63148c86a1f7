//! # crewboard-api
//!
//! HTTP API layer for CrewBoard built on Axum.
//!
//! Provides the JSON endpoints consumed by the scheduling views, the
//! identity extractor, request logging and CORS middleware, DTOs and the
//! mapping of `AppError` onto HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
