//! Access-code accounts.

pub mod service;

pub use service::AccessCodeService;
