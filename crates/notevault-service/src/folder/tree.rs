//! Folder navigation: scoped contents, the whole tree, and breadcrumbs.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId, FolderScope};
use notevault_entity::folder::{Folder, FolderNode, FolderTree};
use notevault_entity::note::Note;

use super::service::FolderService;
use crate::note::NoteService;

/// Everything directly inside one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderContents {
    /// The folder being viewed, `None` at the root.
    pub current_folder: Option<Folder>,
    /// Direct subfolders, by name.
    pub subfolders: Vec<Folder>,
    /// Notes placed directly in the scope, pinned first then newest first.
    pub notes: Vec<Note>,
}

/// Builds folder trees and scoped listings.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Folder tree store.
    folders: Arc<FolderService>,
    /// Note placement layer.
    notes: Arc<NoteService>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folders: Arc<FolderService>, notes: Arc<NoteService>) -> Self {
        Self { folders, notes }
    }

    /// Lists the subfolders and notes of `scope`.
    ///
    /// A folder scope is checked for existence before anything is listed.
    pub async fn get_contents(
        &self,
        owner: AccountId,
        scope: FolderScope,
    ) -> AppResult<FolderContents> {
        let current_folder = match scope {
            FolderScope::Root => None,
            FolderScope::Folder(id) => Some(self.folders.get_folder(owner, id).await?),
        };

        let parent = scope.as_parent();
        let subfolders = self.folders.list_children(owner, parent).await?;
        let notes = self.notes.list_notes_in_folder(owner, parent).await?;

        debug!(
            owner = %owner,
            scope = %scope,
            folders = subfolders.len(),
            notes = notes.len(),
            "Listed folder contents"
        );

        Ok(FolderContents {
            current_folder,
            subfolders,
            notes,
        })
    }

    /// Every folder of `owner` as a flat list ordered by path then name.
    pub async fn get_whole_tree(&self, owner: AccountId) -> AppResult<Vec<Folder>> {
        self.folders.list_all(owner).await
    }

    /// Every folder of `owner` as a nested forest.
    pub async fn get_forest(&self, owner: AccountId) -> AppResult<FolderTree> {
        let all = self.get_whole_tree(owner).await?;
        Ok(Self::build_forest(&all))
    }

    /// Rebuilds the nested forest from `parent` links; siblings sorted by name.
    ///
    /// Folders not reachable from a root-level folder are left out.
    pub fn build_forest(folders: &[Folder]) -> FolderTree {
        let mut by_parent: HashMap<Option<FolderId>, Vec<&Folder>> = HashMap::new();
        for folder in folders {
            by_parent.entry(folder.parent_id).or_default().push(folder);
        }
        for siblings in by_parent.values_mut() {
            siblings.sort_by(|a, b| a.name.cmp(&b.name));
        }

        // Breadth-first from the roots gives every reachable folder a depth
        // and an order in which parents precede children.
        let mut order: Vec<(&Folder, u32)> = Vec::with_capacity(folders.len());
        let mut seen = HashSet::new();
        let mut queue: VecDeque<(&Folder, u32)> = by_parent
            .get(&None)
            .map(|roots| roots.iter().map(|f| (*f, 0)).collect())
            .unwrap_or_default();
        while let Some((folder, depth)) = queue.pop_front() {
            if !seen.insert(folder.id) {
                continue;
            }
            order.push((folder, depth));
            if let Some(children) = by_parent.get(&Some(folder.id)) {
                queue.extend(children.iter().map(|c| (*c, depth + 1)));
            }
        }

        // Assemble bottom-up so no recursion is needed.
        let mut built: HashMap<FolderId, FolderNode> = HashMap::with_capacity(order.len());
        for (folder, depth) in order.iter().rev() {
            let children = by_parent
                .get(&Some(folder.id))
                .map(|kids| kids.iter().filter_map(|k| built.remove(&k.id)).collect())
                .unwrap_or_default();
            built.insert(
                folder.id,
                FolderNode {
                    id: folder.id,
                    name: folder.name.clone(),
                    path: folder.path.clone(),
                    depth: *depth,
                    children,
                },
            );
        }

        let roots = by_parent
            .get(&None)
            .map(|roots| roots.iter().filter_map(|r| built.remove(&r.id)).collect())
            .unwrap_or_default();

        FolderTree {
            roots,
            total_folders: order.len() as u64,
        }
    }

    /// Ancestor chain of `folder_id`, root-level folder first, ending with the folder.
    pub async fn breadcrumbs(
        &self,
        owner: AccountId,
        folder_id: FolderId,
    ) -> AppResult<Vec<Folder>> {
        let mut chain = vec![self.folders.get_folder(owner, folder_id).await?];
        let mut visited = HashSet::from([folder_id]);

        while let Some(parent_id) = chain.last().and_then(|f| f.parent_id) {
            if !visited.insert(parent_id) {
                return Err(AppError::internal(format!(
                    "Folder {folder_id} has a cyclic ancestry"
                )));
            }
            chain.push(self.folders.get_folder(owner, parent_id).await?);
        }

        chain.reverse();
        Ok(chain)
    }
}
