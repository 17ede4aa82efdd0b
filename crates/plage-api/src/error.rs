//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl itself lives in `plage-core` next to `AppError`
//! (the orphan rule requires it); this module re-exports the envelope types.

pub use plage_core::error::{ApiErrorBody, ApiErrorResponse};
