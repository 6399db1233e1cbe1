//! Folder management and tree services.

pub mod service;
pub mod tree;

pub use service::{CascadeReport, FolderService};
pub use tree::{FolderContents, TreeService};
