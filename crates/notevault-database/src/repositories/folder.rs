//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::result::AppResult;
use notevault_core::types::{AccountId, FolderId};
use notevault_entity::folder::{CreateFolder, Folder};

use crate::traits::FolderStore;

/// Repository for folder CRUD and tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_by_id(&self, owner: AccountId, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_children(
        &self,
        owner: AccountId,
        parent: Option<FolderId>,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
             ORDER BY name COLLATE \"C\" ASC",
        )
        .bind(owner)
        .bind(parent)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list child folders", e))
    }

    async fn find_all(&self, owner: AccountId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 \
             ORDER BY path COLLATE \"C\" ASC, name COLLATE \"C\" ASC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        // The parent check rides along with the insert so a parent deleted
        // or owned by someone else yields no row instead of a dangling link.
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, owner_id, name, parent_id, path) \
             SELECT $1, $2, $3, $4, $5 \
             WHERE $4::uuid IS NULL \
                OR EXISTS (SELECT 1 FROM folders WHERE id = $4 AND owner_id = $2) \
             RETURNING *",
        )
        .bind(FolderId::new())
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(&data.path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found("Parent folder not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })?
        .ok_or_else(|| AppError::not_found("Parent folder not found"))
    }

    async fn rename(
        &self,
        owner: AccountId,
        id: FolderId,
        name: &str,
        path: &str,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $3, path = $4, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(name)
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename folder", e))
    }

    async fn update_path(&self, owner: AccountId, id: FolderId, path: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE folders SET path = $3, updated_at = NOW() WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner)
        .bind(path)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update folder path", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, owner: AccountId, id: FolderId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
