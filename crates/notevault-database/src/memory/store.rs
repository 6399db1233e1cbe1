//! In-memory store implementing every storage trait on top of dashmap.
//!
//! Rows live in concurrent maps shared through `Arc`, so clones of a
//! [`MemoryStore`] see the same data. Foreign keys are emulated: inserts
//! check the referenced folder and folder deletes are refused while
//! anything still points at the folder.

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId, NoteId};
use notevault_entity::account::Account;
use notevault_entity::folder::{CreateFolder, Folder};
use notevault_entity::note::{CreateNote, Note, UpdateNote};

use crate::traits::{AccountStore, FolderStore, NoteStore};

/// Shared in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Folders keyed by ID.
    folders: Arc<DashMap<FolderId, Folder>>,
    /// Notes keyed by ID.
    notes: Arc<DashMap<NoteId, Note>>,
    /// Accounts keyed by access code.
    accounts: Arc<DashMap<String, Account>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn owns_folder(&self, owner: AccountId, id: FolderId) -> bool {
        self.folders
            .get(&id)
            .map(|f| f.owner_id == owner)
            .unwrap_or(false)
    }

    fn sort_notes(notes: &mut [Note]) {
        notes.sort_by_key(|n| (Reverse(n.is_pinned), Reverse(n.created_at)));
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn find_by_id(&self, owner: AccountId, id: FolderId) -> AppResult<Option<Folder>> {
        Ok(self
            .folders
            .get(&id)
            .filter(|f| f.owner_id == owner)
            .map(|f| f.value().clone()))
    }

    async fn find_children(
        &self,
        owner: AccountId,
        parent: Option<FolderId>,
    ) -> AppResult<Vec<Folder>> {
        let mut children: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.owner_id == owner && f.parent_id == parent)
            .map(|f| f.value().clone())
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    async fn find_all(&self, owner: AccountId) -> AppResult<Vec<Folder>> {
        let mut all: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.owner_id == owner)
            .map(|f| f.value().clone())
            .collect();
        all.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.name.cmp(&b.name)));
        Ok(all)
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        if let Some(parent) = data.parent_id {
            if !self.owns_folder(data.owner_id, parent) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }
        let folder = data.clone().into_folder();
        self.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn rename(
        &self,
        owner: AccountId,
        id: FolderId,
        name: &str,
        path: &str,
    ) -> AppResult<Option<Folder>> {
        let Some(mut folder) = self.folders.get_mut(&id) else {
            return Ok(None);
        };
        if folder.owner_id != owner {
            return Ok(None);
        }
        folder.name = name.to_string();
        folder.path = path.to_string();
        folder.updated_at = Utc::now();
        Ok(Some(folder.value().clone()))
    }

    async fn update_path(&self, owner: AccountId, id: FolderId, path: &str) -> AppResult<bool> {
        match self.folders.get_mut(&id) {
            Some(mut folder) if folder.owner_id == owner => {
                folder.path = path.to_string();
                folder.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, owner: AccountId, id: FolderId) -> AppResult<bool> {
        if !self.owns_folder(owner, id) {
            return Ok(false);
        }
        let referenced = self.folders.iter().any(|f| f.parent_id == Some(id))
            || self.notes.iter().any(|n| n.folder_id == Some(id));
        if referenced {
            return Err(AppError::database(format!(
                "Folder {id} is still referenced by child folders or notes"
            )));
        }
        let removed = self
            .folders
            .remove_if(&id, |_, f| f.owner_id == owner)
            .is_some();
        debug!(folder_id = %id, removed, "Memory folder delete");
        Ok(removed)
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn find_by_id(&self, owner: AccountId, id: NoteId) -> AppResult<Option<Note>> {
        Ok(self
            .notes
            .get(&id)
            .filter(|n| n.owner_id == owner)
            .map(|n| n.value().clone()))
    }

    async fn find_in_folder(
        &self,
        owner: AccountId,
        folder: Option<FolderId>,
    ) -> AppResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.owner_id == owner && n.folder_id == folder)
            .map(|n| n.value().clone())
            .collect();
        Self::sort_notes(&mut notes);
        Ok(notes)
    }

    async fn find_all(&self, owner: AccountId) -> AppResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.owner_id == owner)
            .map(|n| n.value().clone())
            .collect();
        Self::sort_notes(&mut notes);
        Ok(notes)
    }

    async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        if let Some(folder) = data.folder_id {
            if !self.owns_folder(data.owner_id, folder) {
                return Err(AppError::not_found("Folder not found"));
            }
        }
        let note = data.clone().into_note();
        self.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(
        &self,
        owner: AccountId,
        id: NoteId,
        update: &UpdateNote,
    ) -> AppResult<Option<Note>> {
        match self.notes.get_mut(&id) {
            Some(mut note) if note.owner_id == owner => {
                update.apply_to(&mut note);
                Ok(Some(note.value().clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, owner: AccountId, id: NoteId) -> AppResult<bool> {
        Ok(self
            .notes
            .remove_if(&id, |_, n| n.owner_id == owner)
            .is_some())
    }

    async fn delete_in_folder(&self, owner: AccountId, folder: FolderId) -> AppResult<u64> {
        let mut removed = 0u64;
        self.notes.retain(|_, n| {
            let matched = n.owner_id == owner && n.folder_id == Some(folder);
            if matched {
                removed += 1;
            }
            !matched
        });
        Ok(removed)
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(code).map(|a| a.value().clone()))
    }

    async fn find_active_by_code(&self, code: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .get(code)
            .filter(|a| a.is_active)
            .map(|a| a.value().clone()))
    }

    async fn create(&self, code: &str) -> AppResult<Account> {
        match self.accounts.entry(code.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Access code already exists. Please choose a different one.",
            )),
            Entry::Vacant(slot) => {
                let account = Account::new(code);
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    async fn touch_last_accessed(&self, id: AccountId) -> AppResult<()> {
        if let Some(mut account) = self.accounts.iter_mut().find(|a| a.id == id) {
            account.last_accessed = Utc::now();
        }
        Ok(())
    }

    async fn deactivate(&self, code: &str) -> AppResult<Option<Account>> {
        Ok(self.accounts.get_mut(code).map(|mut account| {
            account.is_active = false;
            account.updated_at = Utc::now();
            account.value().clone()
        }))
    }
}
