//! Route handlers, one module per resource.

pub mod auth;
pub mod folder;
pub mod health;
pub mod note;
