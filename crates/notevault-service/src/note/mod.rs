//! Note placement and CRUD.

pub mod service;
pub mod validate;

pub use service::{NewNote, NoteService};
