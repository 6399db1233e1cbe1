//! Core type definitions used across the NoteVault workspace.

pub mod id;
pub mod scope;

pub use id::*;
pub use scope::FolderScope;
