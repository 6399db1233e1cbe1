//! # notevault-entity
//!
//! Domain entity models for NoteVault. Every struct in this crate
//! represents a database table row or a domain value object. Row entities
//! derive `sqlx::FromRow` and serialize with camelCase keys for the API.

pub mod account;
pub mod folder;
pub mod note;
