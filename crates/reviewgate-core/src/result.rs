//! Convenience result type alias for review-gate.

use crate::error::AppError;

/// A specialized `Result` type for review-gate operations.
pub type AppResult<T> = Result<T, AppError>;
