//! Folder tree store: creation, rename, listing, and cascade deletion.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use notevault_core::config::FolderConfig;
use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId};
use notevault_database::traits::{FolderStore, NoteStore};
use notevault_entity::folder::path::child_path;
use notevault_entity::folder::{CreateFolder, Folder, materialized_path};

/// What a cascade delete removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeReport {
    /// Folders removed, including the root of the cascade.
    pub folders_deleted: u64,
    /// Notes removed from every folder of the subtree.
    pub notes_deleted: u64,
}

/// Manages folder CRUD operations for a single account at a time.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder persistence.
    folders: Arc<dyn FolderStore>,
    /// Note persistence, needed to empty folders during a cascade.
    notes: Arc<dyn NoteStore>,
    /// Folder settings.
    config: FolderConfig,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        folders: Arc<dyn FolderStore>,
        notes: Arc<dyn NoteStore>,
        config: FolderConfig,
    ) -> Self {
        Self {
            folders,
            notes,
            config,
        }
    }

    /// Trim a folder name and check its length.
    fn validate_name(&self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }
        if name.chars().count() > self.config.max_name_length {
            return Err(AppError::validation(format!(
                "Folder name cannot exceed {} characters",
                self.config.max_name_length
            )));
        }
        Ok(name.to_string())
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, owner: AccountId, folder_id: FolderId) -> AppResult<Folder> {
        self.folders
            .find_by_id(owner, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Creates a new folder at the root or under `parent_id`.
    pub async fn create_folder(
        &self,
        owner: AccountId,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> AppResult<Folder> {
        let name = self.validate_name(name)?;

        let parent = match parent_id {
            Some(id) => Some(
                self.folders
                    .find_by_id(owner, id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Parent folder not found"))?,
            ),
            None => None,
        };

        let record = CreateFolder {
            owner_id: owner,
            parent_id,
            name,
            path: materialized_path(parent.as_ref()),
        };
        let folder = self.folders.create(&record).await?;

        info!(
            owner = %owner,
            folder_id = %folder.id,
            path = %folder.path,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder and recomputes its own path from its current parent.
    ///
    /// Descendant paths are re-derived only when `cascade_rename_paths` is on.
    pub async fn rename_folder(
        &self,
        owner: AccountId,
        folder_id: FolderId,
        new_name: &str,
    ) -> AppResult<Folder> {
        let name = self.validate_name(new_name)?;
        let folder = self.get_folder(owner, folder_id).await?;

        let parent = match folder.parent_id {
            Some(parent_id) => Some(
                self.folders
                    .find_by_id(owner, parent_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Parent folder not found"))?,
            ),
            None => None,
        };
        let path = materialized_path(parent.as_ref());

        let renamed = self
            .folders
            .rename(owner, folder_id, &name, &path)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        if self.config.cascade_rename_paths {
            let updated = self.repath_descendants(owner, &renamed).await?;
            debug!(folder_id = %folder_id, updated, "Descendant paths re-derived");
        }

        info!(
            owner = %owner,
            folder_id = %folder_id,
            new_name = %renamed.name,
            "Folder renamed"
        );

        Ok(renamed)
    }

    /// Breadth-first walk below `root` rewriting every stored path.
    async fn repath_descendants(&self, owner: AccountId, root: &Folder) -> AppResult<u64> {
        let mut updated = 0u64;
        let mut visited = HashSet::from([root.id]);
        let mut queue = VecDeque::from([(root.id, child_path(&root.path, &root.name))]);

        while let Some((parent_id, path)) = queue.pop_front() {
            for child in self.folders.find_children(owner, Some(parent_id)).await? {
                if !visited.insert(child.id) {
                    continue;
                }
                if self.folders.update_path(owner, child.id, &path).await? {
                    updated += 1;
                    queue.push_back((child.id, child_path(&path, &child.name)));
                }
            }
        }

        Ok(updated)
    }

    /// Deletes a folder, every folder below it, and every note they contain.
    ///
    /// Post-order over an explicit stack: children go first, then the
    /// folder's notes, then the folder itself. Steps are independent, so a
    /// failed cascade can be re-run on the same folder to finish the job.
    pub async fn delete_folder_cascade(
        &self,
        owner: AccountId,
        folder_id: FolderId,
    ) -> AppResult<CascadeReport> {
        let root = self.get_folder(owner, folder_id).await?;

        let mut report = CascadeReport::default();
        let mut visited = HashSet::new();
        let mut stack = vec![(root.id, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                report.notes_deleted += self.notes.delete_in_folder(owner, id).await?;
                if self.folders.delete(owner, id).await? {
                    report.folders_deleted += 1;
                } else {
                    warn!(folder_id = %id, "Folder vanished during cascade");
                }
                continue;
            }

            if !visited.insert(id) {
                continue;
            }
            stack.push((id, true));
            for child in self.folders.find_children(owner, Some(id)).await? {
                if !visited.contains(&child.id) {
                    stack.push((child.id, false));
                }
            }
        }

        info!(
            owner = %owner,
            folder_id = %folder_id,
            path = %root.path,
            folders_deleted = report.folders_deleted,
            notes_deleted = report.notes_deleted,
            "Folder deleted"
        );

        Ok(report)
    }

    /// Lists folders whose parent is exactly `parent_id`, by name.
    pub async fn list_children(
        &self,
        owner: AccountId,
        parent_id: Option<FolderId>,
    ) -> AppResult<Vec<Folder>> {
        self.folders.find_children(owner, parent_id).await
    }

    /// Lists every folder of `owner`, ordered by path then name.
    pub async fn list_all(&self, owner: AccountId) -> AppResult<Vec<Folder>> {
        self.folders.find_all(owner).await
    }
}
