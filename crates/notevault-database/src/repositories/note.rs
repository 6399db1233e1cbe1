//! Note repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId, NoteId};
use notevault_entity::note::{CreateNote, Note, UpdateNote};

use crate::traits::NoteStore;

/// Repository for note CRUD and folder-scoped listing.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn find_by_id(&self, owner: AccountId, id: NoteId) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note", e))
    }

    async fn find_in_folder(
        &self,
        owner: AccountId,
        folder: Option<FolderId>,
    ) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE owner_id = $1 AND folder_id IS NOT DISTINCT FROM $2 \
             ORDER BY is_pinned DESC, created_at DESC",
        )
        .bind(owner)
        .bind(folder)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folder notes", e))
    }

    async fn find_all(&self, owner: AccountId) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE owner_id = $1 ORDER BY is_pinned DESC, created_at DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }

    async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, owner_id, folder_id, title, content, tags, is_pinned, images) \
             SELECT $1, $2, $3, $4, $5, $6, $7, $8 \
             WHERE $3::uuid IS NULL \
                OR EXISTS (SELECT 1 FROM folders WHERE id = $3 AND owner_id = $2) \
             RETURNING *",
        )
        .bind(NoteId::new())
        .bind(data.owner_id)
        .bind(data.folder_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.tags)
        .bind(data.is_pinned)
        .bind(Json(&data.images))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found("Folder not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create note", e),
        })?
        .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    async fn update(
        &self,
        owner: AccountId,
        id: NoteId,
        update: &UpdateNote,
    ) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET \
                title = COALESCE($3, title), \
                content = COALESCE($4, content), \
                tags = COALESCE($5, tags), \
                is_pinned = COALESCE($6, is_pinned), \
                images = COALESCE($7, images), \
                updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(update.title.as_deref())
        .bind(update.content.as_deref())
        .bind(update.tags.clone())
        .bind(update.is_pinned)
        .bind(update.images.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))
    }

    async fn delete(&self, owner: AccountId, id: NoteId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_in_folder(&self, owner: AccountId, folder: FolderId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE folder_id = $1 AND owner_id = $2")
            .bind(folder)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder notes", e)
            })?;
        Ok(result.rows_affected())
    }
}
