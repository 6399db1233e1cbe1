//! # notevault-service
//!
//! Business logic service layer for NoteVault. The folder tree store owns
//! path materialization and cascade deletion, the note service binds notes
//! to folders, and the tree service composes both for navigation.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` references.

pub mod account;
pub mod folder;
pub mod note;

pub use account::AccessCodeService;
pub use folder::{CascadeReport, FolderContents, FolderService, TreeService};
pub use note::{NewNote, NoteService};
