//! Maps domain `AppError` to HTTP responses.
//!
//! The mapping and the `IntoResponse` impl live in `notevault_core::http`
//! (orphan rule); they are re-exported here.

pub use notevault_core::http::{ApiErrorResponse, status_for};
