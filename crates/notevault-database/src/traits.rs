//! Persistence traits consumed by the service layer.

use async_trait::async_trait;

use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId, NoteId};
use notevault_entity::account::Account;
use notevault_entity::folder::{CreateFolder, Folder};
use notevault_entity::note::{CreateNote, Note, UpdateNote};

/// Folder persistence, scoped by owner on every call.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a folder by ID under `owner`.
    async fn find_by_id(&self, owner: AccountId, id: FolderId) -> AppResult<Option<Folder>>;

    /// Folders whose parent is exactly `parent` (None = root level), name ascending.
    async fn find_children(
        &self,
        owner: AccountId,
        parent: Option<FolderId>,
    ) -> AppResult<Vec<Folder>>;

    /// Every folder of `owner`, ordered by `(path, name)` ascending.
    async fn find_all(&self, owner: AccountId) -> AppResult<Vec<Folder>>;

    /// Insert a folder.
    ///
    /// Fails with `NotFound` if `parent_id` is set and no longer names a
    /// folder of the same owner at insert time.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Set name and path of a folder. Returns `None` if it does not exist under `owner`.
    async fn rename(
        &self,
        owner: AccountId,
        id: FolderId,
        name: &str,
        path: &str,
    ) -> AppResult<Option<Folder>>;

    /// Overwrite the stored path of a folder. Returns `false` if it does not exist.
    async fn update_path(&self, owner: AccountId, id: FolderId, path: &str) -> AppResult<bool>;

    /// Delete a single folder row. Returns `false` if it was already gone.
    ///
    /// Fails with a storage error while child folders or notes still reference it.
    async fn delete(&self, owner: AccountId, id: FolderId) -> AppResult<bool>;
}

/// Note persistence, scoped by owner on every call.
#[async_trait]
pub trait NoteStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a note by ID under `owner`.
    async fn find_by_id(&self, owner: AccountId, id: NoteId) -> AppResult<Option<Note>>;

    /// Notes whose folder is exactly `folder` (None = root), pinned first then newest first.
    async fn find_in_folder(
        &self,
        owner: AccountId,
        folder: Option<FolderId>,
    ) -> AppResult<Vec<Note>>;

    /// Every note of `owner`, pinned first then newest first.
    async fn find_all(&self, owner: AccountId) -> AppResult<Vec<Note>>;

    /// Insert a note.
    ///
    /// Fails with `NotFound` if `folder_id` is set and no longer names a
    /// folder of the same owner at insert time.
    async fn create(&self, data: &CreateNote) -> AppResult<Note>;

    /// Apply a partial update. Returns `None` if the note does not exist under `owner`.
    async fn update(
        &self,
        owner: AccountId,
        id: NoteId,
        update: &UpdateNote,
    ) -> AppResult<Option<Note>>;

    /// Delete a note. Returns `false` if it did not exist under `owner`.
    async fn delete(&self, owner: AccountId, id: NoteId) -> AppResult<bool>;

    /// Delete every note directly inside `folder`. Returns the number removed.
    async fn delete_in_folder(&self, owner: AccountId, folder: FolderId) -> AppResult<u64>;
}

/// Account persistence, keyed by access code.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an account by access code regardless of its active flag.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Account>>;

    /// Find an active account by access code.
    async fn find_active_by_code(&self, code: &str) -> AppResult<Option<Account>>;

    /// Insert a new active account. Fails with `Conflict` if the code is taken.
    async fn create(&self, code: &str) -> AppResult<Account>;

    /// Record a successful validation.
    async fn touch_last_accessed(&self, id: AccountId) -> AppResult<()>;

    /// Mark the account holding `code` inactive. Returns `None` if the code is unknown.
    async fn deactivate(&self, code: &str) -> AppResult<Option<Account>>;
}
