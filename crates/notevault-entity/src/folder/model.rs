//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notevault_core::types::{AccountId, FolderId};

/// A folder in an account's hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The owning account.
    pub owner_id: AccountId,
    /// Folder name, trimmed.
    pub name: String,
    /// Parent folder ID (null for root-level folders).
    pub parent_id: Option<FolderId>,
    /// Materialized ancestor chain, e.g. `/Work/Projects`; `/` at root level.
    pub path: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root-level folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The owning account.
    pub owner_id: AccountId,
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
    /// Folder name, already trimmed and validated.
    pub name: String,
    /// Materialized path derived from the parent.
    pub path: String,
}

impl CreateFolder {
    /// Materialize the row this request describes.
    pub fn into_folder(self) -> Folder {
        let now = Utc::now();
        Folder {
            id: FolderId::new(),
            owner_id: self.owner_id,
            name: self.name,
            parent_id: self.parent_id,
            path: self.path,
            created_at: now,
            updated_at: now,
        }
    }
}
