//! # notevault-core
//!
//! Core crate for NoteVault. Contains configuration schemas, typed
//! identifiers, the folder scope token, and the unified error system.
//!
//! This crate has **no** internal dependencies on other NoteVault crates.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod http;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
