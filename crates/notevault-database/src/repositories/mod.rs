//! PostgreSQL repository implementations of the storage traits.

pub mod account;
pub mod folder;
pub mod note;

pub use account::AccountRepository;
pub use folder::FolderRepository;
pub use note::NoteRepository;
