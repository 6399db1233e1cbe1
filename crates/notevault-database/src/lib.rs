//! # notevault-database
//!
//! Storage traits for accounts, folders, and notes, together with a
//! PostgreSQL implementation (sqlx repositories + migrations) and an
//! in-memory implementation used for development and tests.
//!
//! Every trait method takes the owning [`AccountId`](notevault_core::types::AccountId)
//! and filters on it; no store operation can reach another account's rows.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;
pub mod traits;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use stores::Stores;
pub use traits::{AccountStore, FolderStore, NoteStore};
