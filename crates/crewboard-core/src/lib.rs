//! # crewboard-core
//!
//! Core crate for CrewBoard. Contains the unified error system,
//! configuration schemas, typed identifiers, assignment events and the
//! generic repository trait.
//!
//! This crate has **no** internal dependencies on other CrewBoard crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
