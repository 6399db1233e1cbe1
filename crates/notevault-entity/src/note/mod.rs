//! Note domain entities.

pub mod image;
pub mod model;

pub use image::NoteImage;
pub use model::{CreateNote, Note, UpdateNote};
