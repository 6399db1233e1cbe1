//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use notevault_core::types::FolderId;

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Materialized path as stored.
    pub path: String,
    /// Distance from the root container (0 for root-level folders).
    pub depth: u32,
    /// Child folder nodes, ordered by name.
    pub children: Vec<FolderNode>,
}

/// An account's folder forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTree {
    /// The root-level node(s).
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }
}
