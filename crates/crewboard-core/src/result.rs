//! Convenience result type alias for CrewBoard.

use crate::error::AppError;

/// A specialized `Result` type for CrewBoard operations.
pub type AppResult<T> = Result<T, AppError>;
