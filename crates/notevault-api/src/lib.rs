//! # notevault-api
//!
//! HTTP API layer for NoteVault built on Axum.
//!
//! Provides the REST endpoints, the access-code extractor, middleware
//! (CORS, request logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
