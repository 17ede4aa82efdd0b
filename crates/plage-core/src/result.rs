//! Result alias shared by every Plage crate.

use crate::error::AppError;

/// `Result` with the error pinned to [`AppError`].
///
/// Fallible functions across the workspace return this so call sites can
/// chain `?` without naming the error type.
pub type AppResult<T> = Result<T, AppError>;
