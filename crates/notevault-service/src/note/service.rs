//! Note placement, listing, and CRUD.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use notevault_core::config::NoteConfig;
use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId, NoteId};
use notevault_database::traits::{FolderStore, NoteStore};
use notevault_entity::note::{CreateNote, Note, NoteImage, UpdateNote};

use super::validate;

/// Fields of a note about to be placed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNote {
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Tags.
    pub tags: Vec<String>,
    /// Pinned flag.
    pub is_pinned: bool,
    /// Embedded images.
    pub images: Vec<NoteImage>,
}

/// Binds notes to folders and manages their lifecycle.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note persistence.
    notes: Arc<dyn NoteStore>,
    /// Folder persistence, for existence checks.
    folders: Arc<dyn FolderStore>,
    /// Note settings.
    config: NoteConfig,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(
        notes: Arc<dyn NoteStore>,
        folders: Arc<dyn FolderStore>,
        config: NoteConfig,
    ) -> Self {
        Self {
            notes,
            folders,
            config,
        }
    }

    async fn require_folder(
        &self,
        owner: AccountId,
        folder_id: Option<FolderId>,
    ) -> AppResult<()> {
        if let Some(id) = folder_id {
            self.folders
                .find_by_id(owner, id)
                .await?
                .ok_or_else(|| AppError::not_found("Folder not found"))?;
        }
        Ok(())
    }

    /// Creates a note at the root or inside `folder_id`.
    pub async fn place_note(
        &self,
        owner: AccountId,
        folder_id: Option<FolderId>,
        fields: NewNote,
    ) -> AppResult<Note> {
        self.require_folder(owner, folder_id).await?;

        let title = validate::title(&fields.title, self.config.max_title_length)?;
        validate::content(&fields.content)?;
        validate::images(&fields.images)?;

        let record = CreateNote {
            owner_id: owner,
            folder_id,
            title,
            content: fields.content,
            tags: validate::tags(fields.tags),
            is_pinned: fields.is_pinned,
            images: fields.images,
        };
        let note = self.notes.create(&record).await?;

        info!(
            owner = %owner,
            note_id = %note.id,
            folder_id = ?note.folder_id,
            "Note created"
        );

        Ok(note)
    }

    /// Lists notes placed exactly in `folder_id`, pinned first then newest first.
    pub async fn list_notes_in_folder(
        &self,
        owner: AccountId,
        folder_id: Option<FolderId>,
    ) -> AppResult<Vec<Note>> {
        self.require_folder(owner, folder_id).await?;
        self.notes.find_in_folder(owner, folder_id).await
    }

    /// Lists every note of `owner`.
    pub async fn list_notes(&self, owner: AccountId) -> AppResult<Vec<Note>> {
        self.notes.find_all(owner).await
    }

    /// Gets a note by ID.
    pub async fn get_note(&self, owner: AccountId, note_id: NoteId) -> AppResult<Note> {
        self.notes
            .find_by_id(owner, note_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Applies a partial update, validating the fields that are present.
    pub async fn update_note(
        &self,
        owner: AccountId,
        note_id: NoteId,
        mut patch: UpdateNote,
    ) -> AppResult<Note> {
        if let Some(title) = patch.title.take() {
            patch.title = Some(validate::title(&title, self.config.max_title_length)?);
        }
        if let Some(content) = &patch.content {
            validate::content(content)?;
        }
        if let Some(tags) = patch.tags.take() {
            patch.tags = Some(validate::tags(tags));
        }
        if let Some(images) = &patch.images {
            validate::images(images)?;
        }

        if patch.is_empty() {
            return self.get_note(owner, note_id).await;
        }

        let note = self
            .notes
            .update(owner, note_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;

        info!(owner = %owner, note_id = %note_id, "Note updated");
        Ok(note)
    }

    /// Deletes a note.
    pub async fn delete_note(&self, owner: AccountId, note_id: NoteId) -> AppResult<()> {
        if !self.notes.delete(owner, note_id).await? {
            return Err(AppError::not_found("Note not found"));
        }
        info!(owner = %owner, note_id = %note_id, "Note deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use notevault_core::error::ErrorKind;
    use notevault_database::Stores;
    use notevault_entity::folder::CreateFolder;

    fn service() -> (NoteService, Stores) {
        let stores = Stores::memory();
        let svc = NoteService::new(
            stores.notes.clone(),
            stores.folders.clone(),
            NoteConfig::default(),
        );
        (svc, stores)
    }

    fn fields(title: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            content: "body".to_string(),
            ..NewNote::default()
        }
    }

    async fn folder(stores: &Stores, owner: AccountId) -> FolderId {
        stores
            .folders
            .create(&CreateFolder {
                owner_id: owner,
                parent_id: None,
                name: "Inbox".to_string(),
                path: "/".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_place_in_missing_folder_creates_nothing() {
        let (svc, _) = service();
        let owner = AccountId::new();

        let err = svc
            .place_note(owner, Some(FolderId::new()), fields("Lost"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(svc.list_notes(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_place_normalizes_fields() {
        let (svc, stores) = service();
        let owner = AccountId::new();
        let inbox = folder(&stores, owner).await;

        let note = svc
            .place_note(
                owner,
                Some(inbox),
                NewNote {
                    title: "  Plan  ".to_string(),
                    content: "steps".to_string(),
                    tags: vec![" work ".to_string(), " ".to_string()],
                    ..NewNote::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(note.title, "Plan");
        assert_eq!(note.tags, vec!["work"]);
        assert_eq!(note.folder_id, Some(inbox));
        assert!(!note.is_pinned);
    }

    #[tokio::test]
    async fn test_required_fields() {
        let (svc, _) = service();
        let owner = AccountId::new();

        let err = svc.place_note(owner, None, fields(" ")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let mut empty_body = fields("t");
        empty_body.content.clear();
        let err = svc.place_note(owner, None, empty_body).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_folder_listing_order_and_scope() {
        let (svc, stores) = service();
        let owner = AccountId::new();
        let inbox = folder(&stores, owner).await;

        svc.place_note(owner, Some(inbox), fields("old")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        let mut pinned = fields("pinned");
        pinned.is_pinned = true;
        svc.place_note(owner, Some(inbox), pinned).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        svc.place_note(owner, Some(inbox), fields("new")).await.unwrap();
        svc.place_note(owner, None, fields("at root")).await.unwrap();

        let titles: Vec<String> = svc
            .list_notes_in_folder(owner, Some(inbox))
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["pinned", "new", "old"]);

        let root = svc.list_notes_in_folder(owner, None).await.unwrap();
        assert_eq!(root.len(), 1);

        let err = svc
            .list_notes_in_folder(AccountId::new(), Some(inbox))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (svc, _) = service();
        let owner = AccountId::new();
        let note = svc.place_note(owner, None, fields("draft")).await.unwrap();

        let updated = svc
            .update_note(
                owner,
                note.id,
                UpdateNote {
                    title: Some(" final ".to_string()),
                    is_pinned: Some(true),
                    ..UpdateNote::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "final");
        assert!(updated.is_pinned);
        assert_eq!(updated.content, "body");

        let err = svc
            .update_note(
                owner,
                note.id,
                UpdateNote {
                    content: Some(String::new()),
                    ..UpdateNote::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let stranger = AccountId::new();
        let err = svc.delete_note(stranger, note.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        svc.delete_note(owner, note.id).await.unwrap();
        let err = svc.get_note(owner, note.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
